use desktop_runtime::{DesktopHostContext, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Windows 11 Portfolio" />
        <Meta name="description" content="A Windows 11 styled desktop wrapped around a personal portfolio." />
        <Meta name="desktop-host" content=platform_host_web::host_strategy_name() />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider host=DesktopHostContext::default()>
            <DesktopShell />
        </DesktopProvider>
    }
}
