use leptos::{either::Either, prelude::*};

use super::controls::{provide_page_controls, use_page_controls};
use super::header::{Brand, Header};
use super::progress::ProgressBar;
use super::resume::ResumeDialog;
use super::reveal::Reveal;
use crate::content::{
    portfolio, About, Contact, Education, Experience, Portfolio, Profile, Project, SkillCategory,
    SkillGroup,
};
use crate::page::Section;

/// Stagger between items revealed together in a grid.
const STAGGER_MS: u32 = 100;

#[component]
pub fn HomePage() -> impl IntoView {
    match portfolio() {
        Ok(portfolio) => Either::Left(view! { <PortfolioPage portfolio /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <p class="py-32 text-center text-slate-600">"Portfolio content is unavailable."</p>
            })
        }
    }
}

#[component]
fn PortfolioPage(portfolio: &'static Portfolio) -> impl IntoView {
    provide_page_controls(portfolio.resume.clone());

    view! {
        <div class="min-h-screen bg-gradient-to-br from-amber-50 via-orange-50 to-yellow-50">
            <ProgressBar />
            <Header brand=portfolio.profile.name.as_str() />
            <Hero profile=&portfolio.profile />
            <AboutSection about=&portfolio.about />
            <SkillsSection groups=portfolio.skills.as_slice() />
            <ProjectsSection projects=portfolio.projects.as_slice() />
            <ExperienceSection entries=portfolio.experience.as_slice() />
            <EducationSection entries=portfolio.education.as_slice() />
            <ContactSection contact=&portfolio.contact />
            <Footer
                brand=portfolio.profile.name.as_str()
                contact=&portfolio.contact
                copyright=portfolio.copyright.as_str()
            />
            <ResumeDialog />
        </div>
    }
}

#[component]
fn SectionHeading(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] accent: Option<&'static str>,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <Reveal class="text-center mb-16">
            <span class="text-amber-600 font-semibold text-lg mb-4 block">{eyebrow}</span>
            <h2 class="text-4xl sm:text-5xl font-bold text-slate-900 mb-6">
                {title}
                {accent
                    .map(|accent| {
                        view! {
                            <br />
                            <span class="text-amber-600">{accent}</span>
                        }
                    })}
            </h2>
            {subtitle
                .map(|subtitle| {
                    view! { <p class="text-xl text-slate-600 max-w-3xl mx-auto">{subtitle}</p> }
                })}
        </Reveal>
    }
}

#[component]
fn Hero(profile: &'static Profile) -> impl IntoView {
    let controls = use_page_controls();

    view! {
        <section class="pt-32 pb-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-7xl mx-auto">
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-12 items-center">
                    <Reveal class="lg:col-span-7 text-center lg:text-left" delay_ms=200>
                        <div class="flex items-center justify-center lg:justify-start gap-2 mb-6">
                            <div class="w-12 h-12 bg-amber-100 rounded-full flex items-center justify-center">
                                <span class="text-2xl">"👋"</span>
                            </div>
                            <span class="text-slate-600 font-medium">{profile.greeting.as_str()}</span>
                        </div>

                        <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold mb-8 leading-tight">
                            {profile
                                .headline
                                .iter()
                                .enumerate()
                                .map(|(i, word)| {
                                    let class = if i % 2 == 1 {
                                        "text-amber-600 block"
                                    } else {
                                        "text-slate-900 block"
                                    };
                                    view! { <span class=class>{word.as_str()}</span> }
                                })
                                .collect_view()}
                        </h1>

                        <p class="text-xl text-slate-600 mb-8 max-w-2xl mx-auto lg:mx-0 leading-relaxed">
                            {profile.tagline.as_str()}
                        </p>

                        <div class="flex flex-col sm:flex-row gap-4 justify-center lg:justify-start items-center mb-12">
                            <button
                                class="group bg-amber-600 hover:bg-amber-700 text-white px-8 py-4 rounded-full font-semibold text-lg transition-transform hover:scale-105 active:scale-95"
                                on:click=move |_| controls.navigate(Section::Projects)
                            >
                                "View My Work"
                                <span class="inline-block ml-2 group-hover:translate-x-1 transition-transform">
                                    "→"
                                </span>
                            </button>
                            <button
                                class="border-2 border-slate-300 text-slate-700 hover:border-amber-600 hover:text-amber-600 px-8 py-4 rounded-full font-semibold text-lg bg-white/80 backdrop-blur-sm transition-transform hover:scale-105 active:scale-95"
                                on:click=move |_| controls.navigate(Section::Contact)
                            >
                                "Get In Touch"
                            </button>
                        </div>

                        <div class="grid grid-cols-3 gap-8 max-w-md mx-auto lg:mx-0">
                            {profile
                                .stats
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div class="text-center lg:text-left">
                                            <div class="text-3xl font-bold text-slate-900">
                                                {stat.value.as_str()}
                                            </div>
                                            <div class="text-sm text-slate-600 font-medium">
                                                {stat.label.as_str()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal class="lg:col-span-5 flex justify-center" delay_ms=400>
                        <div class="relative">
                            <div class="absolute -inset-8 bg-gradient-to-r from-amber-200 to-orange-200 rounded-3xl opacity-20 blur-2xl"></div>
                            <div class="relative z-10 transition-transform duration-300 hover:scale-[1.02]">
                                <div class="relative w-80 h-80 sm:w-96 sm:h-96 lg:w-[420px] lg:h-[420px]">
                                    <div class="absolute inset-0 bg-gradient-to-br from-amber-400 to-orange-500 rounded-3xl p-1">
                                        <div class="w-full h-full bg-white rounded-3xl p-3">
                                            <img
                                                src=profile.portrait.src.as_str()
                                                alt=profile.portrait.alt.as_str()
                                                class="w-full h-full object-cover rounded-2xl"
                                            />
                                        </div>
                                    </div>

                                    <div class="absolute -top-4 -right-4 bg-white rounded-2xl p-4 shadow-lg border border-amber-100 animate-float">
                                        <div class="flex items-center gap-2">
                                            <div class="w-3 h-3 bg-green-500 rounded-full animate-pulse"></div>
                                            <span class="text-sm font-semibold text-slate-700">
                                                {profile.availability.as_str()}
                                            </span>
                                        </div>
                                    </div>

                                    <div class="absolute -bottom-6 -left-6 bg-white rounded-xl p-3 shadow-lg border border-amber-100 animate-drift">
                                        <div class="flex items-center gap-2">
                                            <span class="text-amber-600 font-mono font-bold">"</>"</span>
                                            <span class="text-sm font-medium text-slate-700">
                                                {profile.specialty.as_str()}
                                            </span>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn AboutSection(about: &'static About) -> impl IntoView {
    view! {
        <section id=Section::About.id() class="py-24 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    eyebrow="About Me"
                    title="Passionate about creating"
                    accent="digital solutions"
                />

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-center">
                    <Reveal>
                        <div class="prose prose-lg text-slate-600 leading-relaxed space-y-6">
                            {about
                                .paragraphs
                                .iter()
                                .map(|p| view! { <p>{p.as_str()}</p> })
                                .collect_view()}
                        </div>
                    </Reveal>

                    <Reveal class="space-y-6">
                        <div class="bg-amber-50 rounded-2xl p-6 border border-amber-100">
                            <h3 class="font-bold text-slate-900 mb-4 text-xl">"Key Strengths"</h3>
                            <ul class="space-y-3">
                                {about
                                    .strengths
                                    .iter()
                                    .map(|s| {
                                        view! {
                                            <li class="flex items-start gap-3">
                                                <span class="text-amber-600 flex-shrink-0">"★"</span>
                                                <span class="text-slate-700">{s.as_str()}</span>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

struct SkillStyle {
    icon: &'static str,
    icon_bg: &'static str,
    dot: &'static str,
}

fn skill_style(category: SkillCategory) -> SkillStyle {
    match category {
        SkillCategory::Frontend => SkillStyle {
            icon: "</>",
            icon_bg: "p-3 rounded-xl font-mono font-bold bg-blue-100 text-blue-600",
            dot: "w-2 h-2 rounded-full bg-blue-600",
        },
        SkillCategory::Backend => SkillStyle {
            icon: "▤",
            icon_bg: "p-3 rounded-xl font-mono font-bold bg-green-100 text-green-600",
            dot: "w-2 h-2 rounded-full bg-green-600",
        },
        SkillCategory::Database => SkillStyle {
            icon: "⛁",
            icon_bg: "p-3 rounded-xl font-mono font-bold bg-purple-100 text-purple-600",
            dot: "w-2 h-2 rounded-full bg-purple-600",
        },
        SkillCategory::Tools => SkillStyle {
            icon: "✎",
            icon_bg: "p-3 rounded-xl font-mono font-bold bg-orange-100 text-orange-600",
            dot: "w-2 h-2 rounded-full bg-orange-600",
        },
    }
}

#[component]
fn SkillsSection(groups: &'static [SkillGroup]) -> impl IntoView {
    view! {
        <section
            id=Section::Skills.id()
            class="py-24 px-4 sm:px-6 lg:px-8 bg-gradient-to-br from-amber-50 to-orange-50"
        >
            <div class="max-w-7xl mx-auto">
                <SectionHeading eyebrow="Skills & Expertise" title="Technologies I work with" />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {groups
                        .iter()
                        .zip((0u32..).step_by(STAGGER_MS as usize))
                        .map(|(group, delay_ms)| {
                            let style = skill_style(group.category);
                            view! {
                                <Reveal delay_ms>
                                    <div class="bg-white rounded-2xl p-8 border border-amber-100 hover:shadow-lg transition-shadow">
                                        <div class="flex items-center gap-3 mb-6">
                                            <div class=style.icon_bg>{style.icon}</div>
                                            <h3 class="font-bold text-slate-900 text-xl">
                                                {group.category.title()}
                                            </h3>
                                        </div>
                                        <div class="space-y-3">
                                            {group
                                                .skills
                                                .iter()
                                                .map(|skill| {
                                                    view! {
                                                        <div class="flex items-center gap-3">
                                                            <div class=style.dot></div>
                                                            <span class="text-slate-700 font-medium">
                                                                {skill.as_str()}
                                                            </span>
                                                        </div>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="py-24 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    eyebrow="Portfolio"
                    title="Featured Projects"
                    subtitle="Here are some of the projects I've worked on, showcasing my expertise in full-stack development"
                />

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {projects
                        .iter()
                        .zip((0u32..).step_by(STAGGER_MS as usize))
                        .map(|(project, delay_ms)| {
                            view! {
                                <Reveal delay_ms>
                                    <ProjectCard project />
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl border border-amber-100 overflow-hidden hover:shadow-xl transition-all duration-300 group">
            <div class="p-8">
                <div class="flex items-center justify-between mb-4">
                    <span class="px-3 py-1 bg-amber-100 text-amber-700 rounded-full text-sm font-medium">
                        {project.category.as_str()}
                    </span>
                    <a
                        href=project.url.as_str()
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=format!("Visit {}", project.title)
                        class="p-2 bg-slate-100 rounded-full text-slate-600 hover:text-amber-600 hover:bg-amber-50 transition-colors group-hover:scale-110 transition-transform"
                    >
                        "↗"
                    </a>
                </div>

                <h3 class="font-bold text-slate-900 text-xl mb-3">{project.title.as_str()}</h3>
                <p class="text-slate-600 mb-6 leading-relaxed">{project.description.as_str()}</p>

                <div class="flex flex-wrap gap-2">
                    {project
                        .tech
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-slate-100 text-slate-700 rounded-full text-sm font-medium">
                                    {tech.as_str()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn TimelineCard(
    title: &'static str,
    subtitle: &'static str,
    period: &'static str,
    highlights: &'static [String],
    card_class: &'static str,
    period_class: &'static str,
) -> impl IntoView {
    view! {
        <div class=card_class>
            <div class="flex flex-col sm:flex-row sm:items-center sm:justify-between gap-4 mb-6">
                <div>
                    <h3 class="text-2xl font-bold text-slate-900">{title}</h3>
                    <p class="text-xl font-semibold text-amber-600">{subtitle}</p>
                </div>
                <span class=period_class>{period}</span>
            </div>

            <div class="space-y-4 text-slate-700 leading-relaxed">
                {highlights
                    .iter()
                    .map(|h| {
                        view! {
                            <div class="flex items-start gap-3">
                                <div class="w-2 h-2 bg-amber-600 rounded-full mt-2 flex-shrink-0"></div>
                                <p>{h.as_str()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ExperienceSection(entries: &'static [Experience]) -> impl IntoView {
    view! {
        <section
            id=Section::Experience.id()
            class="py-24 px-4 sm:px-6 lg:px-8 bg-gradient-to-br from-amber-50 to-orange-50"
        >
            <div class="max-w-7xl mx-auto">
                <SectionHeading eyebrow="Experience" title="Professional Journey" />

                <Reveal class="max-w-4xl mx-auto space-y-8">
                    {entries
                        .iter()
                        .map(|entry| {
                            view! {
                                <TimelineCard
                                    title=entry.role.as_str()
                                    subtitle=entry.organization.as_str()
                                    period=entry.period.as_str()
                                    highlights=entry.highlights.as_slice()
                                    card_class="bg-white rounded-2xl p-8 border border-amber-100"
                                    period_class="px-4 py-2 bg-amber-100 text-amber-700 rounded-full font-medium w-fit"
                                />
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn EducationSection(entries: &'static [Education]) -> impl IntoView {
    view! {
        <section id=Section::Education.id() class="py-24 px-4 sm:px-6 lg:px-8 bg-white">
            <div class="max-w-7xl mx-auto">
                <SectionHeading eyebrow="Education" title="Academic Background" />

                <Reveal class="max-w-4xl mx-auto space-y-8">
                    {entries
                        .iter()
                        .map(|entry| {
                            view! {
                                <TimelineCard
                                    title=entry.degree.as_str()
                                    subtitle=entry.institution.as_str()
                                    period=entry.period.as_str()
                                    highlights=entry.highlights.as_slice()
                                    card_class="bg-gradient-to-br from-amber-50 to-orange-50 rounded-2xl p-8 border border-amber-100"
                                    period_class="px-4 py-2 bg-white text-amber-700 rounded-full font-medium w-fit border border-amber-200"
                                />
                            }
                        })
                        .collect_view()}
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ContactCard(
    icon: &'static str,
    icon_class: &'static str,
    title: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-white rounded-2xl p-8 text-center border border-amber-100">
            <div class=icon_class>{icon}</div>
            <h3 class="font-bold text-slate-900 mb-2">{title}</h3>
            {children()}
        </div>
    }
}

#[component]
fn ContactSection(contact: &'static Contact) -> impl IntoView {
    view! {
        <section
            id=Section::Contact.id()
            class="py-24 px-4 sm:px-6 lg:px-8 bg-gradient-to-br from-amber-50 to-orange-50"
        >
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    eyebrow="Contact"
                    title="Let's work together"
                    subtitle="I'm always open to discussing new opportunities, interesting projects, or just having a chat about technology."
                />

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-4xl mx-auto mb-12">
                    <Reveal>
                        <ContactCard
                            icon="✉"
                            icon_class="w-16 h-16 bg-blue-100 text-blue-600 text-2xl rounded-2xl flex items-center justify-center mx-auto mb-4"
                            title="Email"
                        >
                            <a
                                href=contact.mailto()
                                class="text-amber-600 hover:text-amber-700 font-medium break-all"
                            >
                                {contact.email.as_str()}
                            </a>
                        </ContactCard>
                    </Reveal>
                    <Reveal delay_ms=STAGGER_MS>
                        <ContactCard
                            icon="☎"
                            icon_class="w-16 h-16 bg-green-100 text-green-600 text-2xl rounded-2xl flex items-center justify-center mx-auto mb-4"
                            title="Phone"
                        >
                            <a
                                href=contact.phone_href.as_str()
                                class="text-amber-600 hover:text-amber-700 font-medium"
                            >
                                {contact.phone.as_str()}
                            </a>
                        </ContactCard>
                    </Reveal>
                    <Reveal delay_ms={STAGGER_MS * 2}>
                        <ContactCard
                            icon="📍"
                            icon_class="w-16 h-16 bg-purple-100 text-purple-600 text-2xl rounded-2xl flex items-center justify-center mx-auto mb-4"
                            title="Location"
                        >
                            <p class="text-slate-600 font-medium">{contact.location.as_str()}</p>
                        </ContactCard>
                    </Reveal>
                </div>

                <Reveal class="text-center">
                    // not wired to anything yet
                    <button class="bg-amber-600 hover:bg-amber-700 text-white px-8 py-4 rounded-full font-semibold text-lg">
                        <span class="mr-2">"✉"</span>
                        "Send Message"
                    </button>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn Footer(brand: &'static str, contact: &'static Contact, copyright: &'static str) -> impl IntoView {
    view! {
        <footer class="py-12 px-4 sm:px-6 lg:px-8 bg-white border-t border-amber-100">
            <div class="max-w-7xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between items-center gap-6">
                    <Brand name=brand />

                    <div class="flex items-center gap-6 text-xl">
                        <a
                            href=contact.mailto()
                            class="text-slate-600 hover:text-amber-600 transition-colors"
                            aria-label="Email"
                        >
                            "✉"
                        </a>
                        <a
                            href=contact.linkedin.as_str()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-slate-600 hover:text-amber-600 transition-colors"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <a
                            href=contact.phone_href.as_str()
                            class="text-slate-600 hover:text-amber-600 transition-colors"
                            aria-label="Phone"
                        >
                            "☎"
                        </a>
                    </div>

                    <p class="text-slate-600">{copyright}</p>
                </div>
            </div>
        </footer>
    }
}
