use leptos::prelude::*;

use super::controls::use_page_controls;
use crate::page::Section;

#[component]
pub fn Header(brand: &'static str) -> impl IntoView {
    let controls = use_page_controls();

    view! {
        <nav class="fixed top-0 left-0 right-0 bg-white/90 backdrop-blur-md z-40 border-b border-amber-100">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-6">
                    <div class="animate-slide-in-left">
                        <Brand name=brand />
                    </div>

                    <div class="hidden md:flex space-x-8">
                        <SectionLinks class="text-slate-700 hover:text-amber-600 transition-colors capitalize font-medium" />
                    </div>

                    <div class="hidden md:flex items-center gap-4">
                        <button
                            class="px-3 py-1.5 rounded-md text-sm border border-amber-200 text-amber-700 hover:bg-amber-50 bg-transparent"
                            on:click=move |_| controls.open_resume()
                        >
                            <span class="mr-2">"⬇"</span>
                            "Resume"
                        </button>
                        <button
                            class="px-3 py-1.5 rounded-md text-sm bg-amber-600 hover:bg-amber-700 text-white"
                            on:click=move |_| controls.navigate(Section::Contact)
                        >
                            "Let's Talk"
                        </button>
                    </div>

                    <button
                        class="md:hidden p-2 text-2xl leading-none"
                        aria-label="Toggle navigation"
                        on:click=move |_| controls.toggle_menu()
                    >
                        {move || if controls.menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>

                <Show when=move || controls.menu_open()>
                    <div class="md:hidden py-4 border-t border-amber-100 animate-fade-in-down">
                        <SectionLinks class="block w-full text-left py-3 text-slate-700 hover:text-amber-600 transition-colors capitalize font-medium" />
                    </div>
                </Show>
            </div>
        </nav>
    }
}

#[component]
fn SectionLinks(class: &'static str) -> impl IntoView {
    let controls = use_page_controls();
    Section::ALL
        .into_iter()
        .map(move |section| {
            view! {
                <button class=class on:click=move |_| controls.navigate(section)>
                    {section.id()}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn Brand(name: &'static str) -> impl IntoView {
    view! {
        <div class="text-2xl font-bold text-slate-900">
            {name}
            <span class="text-amber-600">"."</span>
        </div>
    }
}
