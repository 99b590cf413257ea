use leptos::prelude::*;

use super::controls::use_page_controls;

#[component]
pub fn ResumeDialog() -> impl IntoView {
    let controls = use_page_controls();

    view! {
        <Show when=move || controls.resume_open()>
            <div
                class="fixed inset-0 bg-black/50 backdrop-blur-sm z-50 flex items-center justify-center p-4"
                role="dialog"
                aria-modal="true"
                aria-labelledby="resume-dialog-title"
            >
                <div class="bg-white rounded-2xl p-8 max-w-md w-full mx-4 relative animate-pop-in">
                    <button
                        class="absolute top-4 right-4 text-slate-400 hover:text-slate-600 transition-colors text-2xl leading-none"
                        aria-label="Close"
                        on:click=move |_| controls.close_resume()
                    >
                        "✕"
                    </button>

                    <div class="text-center">
                        <div class="w-16 h-16 bg-amber-100 rounded-2xl flex items-center justify-center mx-auto mb-6 text-2xl text-amber-600">
                            "⬇"
                        </div>

                        <h3 id="resume-dialog-title" class="text-2xl font-bold text-slate-900 mb-2">
                            "Resume"
                        </h3>
                        <p class="text-slate-600 mb-8">"Choose how you'd like to access my resume"</p>

                        <div class="flex flex-col sm:flex-row gap-4">
                            <button
                                class="flex-1 px-6 py-3 rounded-md font-medium bg-amber-600 hover:bg-amber-700 text-white"
                                on:click=move |_| controls.download_resume()
                            >
                                <span class="mr-2">"⬇"</span>
                                "Download"
                            </button>
                            <button
                                class="flex-1 px-6 py-3 rounded-md font-medium border-2 border-slate-300 text-slate-700 hover:border-amber-600 hover:text-amber-600"
                                on:click=move |_| controls.view_resume_online()
                            >
                                <span class="mr-2">"↗"</span>
                                "View Online"
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
