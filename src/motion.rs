//! Scroll progress and the spring that smooths it for display.

/// Largest frame delta fed to the spring, in seconds.
const MAX_FRAME_DELTA: f64 = 0.064;
/// Integration sub-step, in seconds.
const MAX_SUBSTEP: f64 = 0.004;

/// Maps a vertical scroll offset to a completion ratio in `[0, 1]`.
///
/// A document without scrollable overflow has a ratio of 0.
pub fn scroll_ratio(offset: f64, max_offset: f64) -> f64 {
    if !offset.is_finite() || !max_offset.is_finite() || max_offset <= 0.0 {
        return 0.0;
    }
    (offset / max_offset).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// Distance to the target below which the spring may settle.
    pub rest_delta: f64,
    /// Speed below which the spring may settle.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.01,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringStep {
    pub value: f64,
    pub velocity: f64,
    pub at_rest: bool,
}

/// Advances a damped spring pulling `current` toward `target` by `dt` seconds.
///
/// Once both the remaining distance and the speed fall under the configured
/// rest thresholds the value snaps onto the target with zero velocity.
pub fn spring_step(
    current: f64,
    target: f64,
    velocity: f64,
    dt: f64,
    config: &SpringConfig,
) -> SpringStep {
    let dt = if dt.is_finite() {
        dt.clamp(0.0, MAX_FRAME_DELTA)
    } else {
        0.0
    };
    let mass = if config.mass > 0.0 { config.mass } else { 1.0 };
    let steps = (dt / MAX_SUBSTEP).ceil().max(1.0) as usize;
    let h = dt / steps as f64;

    let mut value = current;
    let mut velocity = velocity;
    for _ in 0..steps {
        let force = -config.stiffness * (value - target) - config.damping * velocity;
        velocity += force / mass * h;
        value += velocity * h;
    }

    if (target - value).abs() <= config.rest_delta && velocity.abs() <= config.rest_speed {
        SpringStep {
            value: target,
            velocity: 0.0,
            at_rest: true,
        }
    } else {
        SpringStep {
            value,
            velocity,
            at_rest: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
    at_rest: bool,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            at_rest: true,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        if target != self.target {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Returns true if the displayed value moved.
    pub fn tick(&mut self, dt: f64) -> bool {
        if self.at_rest {
            return false;
        }
        let step = spring_step(self.value, self.target, self.velocity, dt, &self.config);
        let changed = step.value != self.value;
        self.value = step.value;
        self.velocity = step.velocity;
        self.at_rest = step.at_rest;
        changed
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }
}

/// Raw scroll ratio plus its spring-smoothed display value.
#[derive(Debug, Clone)]
pub struct ScrollProgress {
    raw: f64,
    spring: Spring,
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

impl ScrollProgress {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            raw: 0.0,
            spring: Spring::new(config, 0.0),
        }
    }

    pub fn sample(&mut self, offset: f64, max_offset: f64) {
        self.raw = scroll_ratio(offset, max_offset);
        self.spring.set_target(self.raw);
    }

    pub fn tick(&mut self, dt: f64) -> bool {
        self.spring.tick(dt)
    }

    pub fn raw(&self) -> f64 {
        self.raw
    }

    pub fn smoothed(&self) -> f64 {
        self.spring.value()
    }

    pub fn is_settled(&self) -> bool {
        self.spring.is_at_rest()
    }
}
