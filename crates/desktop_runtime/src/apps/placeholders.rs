//! Built-in stand-ins for the portfolio panels and the toy applications.

use desktop_app_contract::AppMountContext;
use leptos::*;

struct PortfolioSection {
    heading: &'static str,
    lines: &'static [&'static str],
}

fn portfolio_section(content: &str) -> PortfolioSection {
    match content {
        "portfolio.about" => PortfolioSection {
            heading: "About Me",
            lines: &[
                "Software engineer who enjoys building tools people want to use.",
                "This desktop is the portfolio: open windows from the taskbar or folders.",
            ],
        },
        "portfolio.projects" => PortfolioSection {
            heading: "Projects",
            lines: &[
                "A browser desktop with draggable, resizable windows.",
                "Small games and utilities hosted inside it.",
            ],
        },
        "portfolio.skills" => PortfolioSection {
            heading: "Skills",
            lines: &["Rust, TypeScript, WebAssembly", "UI architecture, state machines"],
        },
        "portfolio.experience" => PortfolioSection {
            heading: "Experience",
            lines: &["Frontend and systems work across product teams."],
        },
        "portfolio.contact" => PortfolioSection {
            heading: "Contact",
            lines: &["Reach out through the links on the project page."],
        },
        _ => PortfolioSection {
            heading: "Portfolio",
            lines: &[],
        },
    }
}

/// Mounts a static portfolio panel.
pub(super) fn mount_portfolio_panel(context: AppMountContext) -> View {
    let section = portfolio_section(&context.content);
    view! {
        <article class="app-shell portfolio-panel" data-content=context.content.clone()>
            <h2>{section.heading}</h2>
            {section
                .lines
                .iter()
                .map(|line| view! { <p>{*line}</p> })
                .collect_view()}
        </article>
    }
    .into_view()
}

/// Mounts the generic stand-in for a leaf application.
pub(super) fn mount_app_placeholder(context: AppMountContext) -> View {
    let host = context.host;
    view! {
        <div class="app-shell app-placeholder" data-content=context.content.clone()>
            <p>
                <strong>{context.window.to_string()}</strong>
            </p>
            <p>"This application renders inside the window content area."</p>
            <div class="app-toolbar" role="group" aria-label="Window actions">
                <button type="button" class="app-action" on:click=move |_| host.minimize()>
                    "Minimize"
                </button>
                <button type="button" class="app-action" on:click=move |_| host.close()>
                    "Close"
                </button>
            </div>
        </div>
    }
    .into_view()
}
