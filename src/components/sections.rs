//! Static dialog contents.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct ProjectRow {
    name: &'static str,
    summary: &'static str,
    stack: &'static str,
}

const PROJECTS: &[ProjectRow] = &[
    ProjectRow {
        name: "homepage",
        summary: "This site: draggable dialogs and a pair of live clocks.",
        stack: "Rust, Leptos, WASM",
    },
    ProjectRow {
        name: "dotfiles",
        summary: "Shell, editor and terminal configuration.",
        stack: "Shell, Lua",
    },
];

#[derive(Clone, Copy)]
struct ExperienceRow {
    period: &'static str,
    role: &'static str,
    detail: &'static str,
}

const EXPERIENCE: &[ExperienceRow] = &[
    ExperienceRow {
        period: "Now",
        role: "Software engineer",
        detail: "Backend services and developer tooling.",
    },
    ExperienceRow {
        period: "Before",
        role: "Student",
        detail: "Computer science, systems and networking.",
    },
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <p>"Hi! I build software and occasionally write about it."</p>
        <p>"Drag this window by its title bar, or press Esc to close it."</p>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <ul class="projects">
            {PROJECTS
                .iter()
                .map(|row| {
                    view! {
                        <li class="projects__item">
                            <strong>{row.name}</strong>
                            <span class="projects__summary">{row.summary}</span>
                            <span class="projects__stack">{row.stack}</span>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <table class="experience">
            <tbody>
                {EXPERIENCE
                    .iter()
                    .map(|row| {
                        view! {
                            <tr>
                                <td class="experience__period">{row.period}</td>
                                <td>
                                    <strong>{row.role}</strong>
                                    <div>{row.detail}</div>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
