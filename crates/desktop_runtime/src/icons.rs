//! Icon abstraction for the desktop shell.
//!
//! Components ask for a semantic [`IconName`] at an [`IconSize`]; the SVG markup lives only here.
//! Window-control and a few app glyphs come from Fluent UI System Icons (regular 24px).

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic icon identifiers used by shell components.
pub enum IconName {
    /// Portfolio profile.
    Person,
    Folder,
    Code,
    Briefcase,
    Mail,
    /// System settings.
    Settings,
    Clock,
    Timer,
    /// Sticky note.
    Note,
    Terminal,
    Game,
    /// Whiteboard.
    PaintBrush,
    Calculator,
    /// Notepad text document.
    Document,
    Volume,
    Music,
    Battery,
    /// Shutdown / power on.
    Power,
    /// Fallback for unmapped icon ids.
    AppWindow,
    /// Window minimize control.
    WindowMinimize,
    /// Window maximize control.
    WindowMaximize,
    /// Window restore control.
    WindowRestore,
    /// Close control.
    Dismiss,
}

impl IconName {
    /// Every icon, in declaration order.
    pub const ALL: [Self; 23] = [
        Self::Person,
        Self::Folder,
        Self::Code,
        Self::Briefcase,
        Self::Mail,
        Self::Settings,
        Self::Clock,
        Self::Timer,
        Self::Note,
        Self::Terminal,
        Self::Game,
        Self::PaintBrush,
        Self::Calculator,
        Self::Document,
        Self::Volume,
        Self::Music,
        Self::Battery,
        Self::Power,
        Self::AppWindow,
        Self::WindowMinimize,
        Self::WindowMaximize,
        Self::WindowRestore,
        Self::Dismiss,
    ];

    /// Stable token used for CSS hooks and matching catalog `icon` ids.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Folder => "folder",
            Self::Code => "code",
            Self::Briefcase => "briefcase",
            Self::Mail => "mail",
            Self::Settings => "settings",
            Self::Clock => "clock",
            Self::Timer => "timer",
            Self::Note => "note",
            Self::Terminal => "terminal",
            Self::Game => "game",
            Self::PaintBrush => "paint",
            Self::Calculator => "calculator",
            Self::Document => "document",
            Self::Volume => "volume",
            Self::Music => "music",
            Self::Battery => "battery",
            Self::Power => "power",
            Self::AppWindow => "app-window",
            Self::WindowMinimize => "window-minimize",
            Self::WindowMaximize => "window-maximize",
            Self::WindowRestore => "window-restore",
            Self::Dismiss => "dismiss",
        }
    }

    /// Resolves a catalog icon id, falling back to [`IconName::AppWindow`].
    pub fn from_id(icon_id: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|icon| icon.token() == icon_id)
            .unwrap_or(Self::AppWindow)
    }

    fn svg_body(self) -> &'static str {
        match self {
            Self::Person => {
                r#"<path fill-rule="evenodd" d="M12 2a5 5 0 1 1 0 10 5 5 0 0 1 0-10Zm0 1.5a3.5 3.5 0 1 0 0 7 3.5 3.5 0 0 0 0-7ZM4 20.25C4 16.8 7.58 14 12 14s8 2.8 8 6.25a.75.75 0 0 1-1.5 0c0-2.4-2.84-4.75-6.5-4.75s-6.5 2.35-6.5 4.75a.75.75 0 0 1-1.5 0Z"/>"#
            }
            Self::Folder => {
                r#"<path d="M3.5 6.25c0-.97.78-1.75 1.75-1.75h2.88c.2 0 .39.08.53.22l2.06 2.06c.14.14.33.22.53.22h5.5c.97 0 1.75.78 1.75 1.75 0 .09.01.17.04.25H8.72c-1.34 0-2.58.71-3.25 1.87L3.5 14.28V6.25ZM2 17.79A3.25 3.25 0 0 0 5.25 21h11.04c1.33 0 2.57-.72 3.24-1.88l3.03-5.25A3.25 3.25 0 0 0 19.96 9a.75.75 0 0 0 .04-.25c0-1.8-1.45-3.25-3.25-3.25h-5.19L9.72 3.66c-.42-.42-1-.66-1.6-.66H5.26A3.25 3.25 0 0 0 2 6.25V17.79Zm6.72-7.3h11.03a1.75 1.75 0 0 1 1.51 2.63l-3.03 5.25c-.4.7-1.14 1.13-1.95 1.13H5.25a1.75 1.75 0 0 1-1.51-2.63l3.03-5.25c.4-.7 1.14-1.12 1.95-1.12Z"/>"#
            }
            Self::Code => {
                r#"<path d="M8.78 6.22a.75.75 0 0 1 0 1.06L4.06 12l4.72 4.72a.75.75 0 1 1-1.06 1.06l-5.25-5.25a.75.75 0 0 1 0-1.06l5.25-5.25a.75.75 0 0 1 1.06 0Zm6.44 0a.75.75 0 0 1 1.06 0l5.25 5.25c.3.3.3.77 0 1.06l-5.25 5.25a.75.75 0 1 1-1.06-1.06L19.94 12l-4.72-4.72a.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::Briefcase => {
                r#"<path fill-rule="evenodd" d="M9 3h6a1.5 1.5 0 0 1 1.5 1.5V6h3.25A2.25 2.25 0 0 1 22 8.25v10.5A2.25 2.25 0 0 1 19.75 21H4.25A2.25 2.25 0 0 1 2 18.75V8.25A2.25 2.25 0 0 1 4.25 6H7.5V4.5A1.5 1.5 0 0 1 9 3Zm0 1.5V6h6V4.5H9ZM4.25 7.5a.75.75 0 0 0-.75.75v10.5c0 .41.34.75.75.75h15.5c.41 0 .75-.34.75-.75V8.25a.75.75 0 0 0-.75-.75H4.25Z"/>"#
            }
            Self::Mail => {
                r#"<path fill-rule="evenodd" d="M5.25 4h13.5A3.25 3.25 0 0 1 22 7.25v9.5A3.25 3.25 0 0 1 18.75 20H5.25A3.25 3.25 0 0 1 2 16.75v-9.5A3.25 3.25 0 0 1 5.25 4ZM3.5 8.7v8.05c0 .97.78 1.75 1.75 1.75h13.5c.97 0 1.75-.78 1.75-1.75V8.7l-8.12 4.69a.75.75 0 0 1-.76 0L3.5 8.7Zm.05-1.68L12 11.9l8.45-4.88a1.75 1.75 0 0 0-1.7-1.52H5.25c-.8 0-1.48.54-1.7 1.52Z"/>"#
            }
            Self::Settings => {
                r#"<path d="M12 2a1 1 0 0 1 .98.8l.25 1.2a8.1 8.1 0 0 1 1.74.72l1.06-.64a1 1 0 0 1 1.24.15l1.58 1.58a1 1 0 0 1 .15 1.24l-.64 1.06c.3.55.54 1.13.72 1.74l1.2.25a1 1 0 0 1 .8.98v2.24a1 1 0 0 1-.8.98l-1.2.25a8.1 8.1 0 0 1-.72 1.74l.64 1.06a1 1 0 0 1-.15 1.24l-1.58 1.58a1 1 0 0 1-1.24.15l-1.06-.64a8.1 8.1 0 0 1-1.74.72l-.25 1.2a1 1 0 0 1-.98.8H9.76a1 1 0 0 1-.98-.8l-.25-1.2a8.1 8.1 0 0 1-1.74-.72l-1.06.64a1 1 0 0 1-1.24-.15l-1.58-1.58a1 1 0 0 1-.15-1.24l.64-1.06a8.1 8.1 0 0 1-.72-1.74l-1.2-.25a1 1 0 0 1-.8-.98V9.76a1 1 0 0 1 .8-.98l1.2-.25c.18-.61.42-1.19.72-1.74l-.64-1.06a1 1 0 0 1 .15-1.24l1.58-1.58a1 1 0 0 1 1.24-.15l1.06.64c.55-.3 1.13-.54 1.74-.72l.25-1.2A1 1 0 0 1 9.76 2H12Zm-.38 1.5H10.4l-.24 1.16a1 1 0 0 1-.76.78 6.6 6.6 0 0 0-2.2.91 1 1 0 0 1-1.09.02l-1.02-.62-.86.86.62 1.02a1 1 0 0 1-.02 1.09 6.6 6.6 0 0 0-.91 2.2 1 1 0 0 1-.78.76L2 11.62v1.2l1.16.24a1 1 0 0 1 .78.76 6.6 6.6 0 0 0 .91 2.2 1 1 0 0 1 .02 1.09l-.62 1.02.86.86 1.02-.62a1 1 0 0 1 1.09.02 6.6 6.6 0 0 0 2.2.91 1 1 0 0 1 .76.78l.24 1.16h1.2l.24-1.16a1 1 0 0 1 .76-.78 6.6 6.6 0 0 0 2.2-.91 1 1 0 0 1 1.09-.02l1.02.62.86-.86-.62-1.02a1 1 0 0 1 .02-1.09 6.6 6.6 0 0 0 .91-2.2 1 1 0 0 1 .78-.76l1.16-.24v-1.2l-1.16-.24a1 1 0 0 1-.78-.76 6.6 6.6 0 0 0-.91-2.2 1 1 0 0 1-.02-1.09l.62-1.02-.86-.86-1.02.62a1 1 0 0 1-1.09-.02 6.6 6.6 0 0 0-2.2-.91 1 1 0 0 1-.76-.78l-.24-1.16ZM11 8a3 3 0 1 1 0 6 3 3 0 0 1 0-6Zm0 1.5a1.5 1.5 0 1 0 0 3 1.5 1.5 0 0 0 0-3Z"/>"#
            }
            Self::Clock => {
                r#"<path fill-rule="evenodd" d="M12 2a10 10 0 1 1 0 20 10 10 0 0 1 0-20Zm0 1.5a8.5 8.5 0 1 0 0 17 8.5 8.5 0 0 0 0-17ZM11.25 6a.75.75 0 0 1 1.5 0v5.69l3.28 3.28a.75.75 0 1 1-1.06 1.06l-3.5-3.5a.75.75 0 0 1-.22-.53V6Z"/>"#
            }
            Self::Timer => {
                r#"<path fill-rule="evenodd" d="M9.75 1.5h4.5a.75.75 0 0 1 0 1.5h-4.5a.75.75 0 0 1 0-1.5ZM12 4a9 9 0 1 1 0 18 9 9 0 0 1 0-18Zm0 1.5a7.5 7.5 0 1 0 0 15 7.5 7.5 0 0 0 0-15Zm-.75 2.75a.75.75 0 0 1 1.5 0V13a.75.75 0 0 1-1.5 0V8.25Z"/>"#
            }
            Self::Note => {
                r#"<path fill-rule="evenodd" d="M5.25 3h13.5A2.25 2.25 0 0 1 21 5.25V15l-6 6H5.25A2.25 2.25 0 0 1 3 18.75V5.25A2.25 2.25 0 0 1 5.25 3Zm0 1.5a.75.75 0 0 0-.75.75v13.5c0 .41.34.75.75.75h8.25v-3.75a2.25 2.25 0 0 1 2.25-2.25h3.75V5.25a.75.75 0 0 0-.75-.75H5.25Zm13.19 10.5h-2.69a.75.75 0 0 0-.75.75v2.69l3.44-3.44Z"/>"#
            }
            Self::Terminal => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v5.66a1.4 1.4 0 0 0-.99-.8 5.08 5.08 0 0 0-.51-.08V8.5h-15v9.25c0 .97.78 1.75 1.75 1.75h5.68l-.19.19c-.37.37-.6.83-.7 1.31H6.25A3.25 3.25 0 0 1 3 17.75V6.25Zm13 5.68-1.72-1.71a.75.75 0 1 0-1.06 1.06l1.7 1.7a5.12 5.12 0 0 1 1.07-1.05ZM4.5 7h15v-.75c0-.97-.78-1.75-1.75-1.75H6.25c-.97 0-1.75.78-1.75 1.75V7Zm6.28 4.28a.75.75 0 1 0-1.06-1.06l-3 3c-.3.3-.3.77 0 1.06l3 3a.75.75 0 1 0 1.06-1.06l-2.47-2.47 2.47-2.47Zm9.02.81c.35.08.44.51.18.77l-1.9 1.9a1.53 1.53 0 0 0 2.16 2.16l1.9-1.9c.26-.26.69-.17.77.18a4.07 4.07 0 0 1-5.57 4.62l-2.73 2.73a1.53 1.53 0 0 1-2.16-2.16l2.73-2.73a4.07 4.07 0 0 1 4.62-5.57Z"/>"#
            }
            Self::Game => {
                r#"<path fill-rule="evenodd" d="M7 6h10a5 5 0 0 1 0 10H7A5 5 0 0 1 7 6Zm0 1.5a3.5 3.5 0 0 0 0 7h10a3.5 3.5 0 0 0 0-7H7Zm-.5 2.25H8v1.5h1.5v1.5H8v1.5H6.5v-1.5H5v-1.5h1.5v-1.5ZM16 9.5a1 1 0 1 1 0 2 1 1 0 0 1 0-2Zm2 2a1 1 0 1 1 0 2 1 1 0 0 1 0-2Z"/>"#
            }
            Self::PaintBrush => {
                r#"<path d="M5.75 2a.75.75 0 0 0-.75.75v11.5c0 1.24 1 2.25 2.25 2.25H9.5v3a2.5 2.5 0 1 0 5 0v-3h2.25c1.24 0 2.25-1 2.25-2.25V2.75a.75.75 0 0 0-.75-.75H5.75Zm.75 9V3.5h6v1.75a.75.75 0 1 0 1.5 0V3.5h1v2.75a.75.75 0 1 0 1.5 0V3.5h1V11h-11Zm0 3.25V12.5h11v1.75c0 .41-.34.75-.75.75h-3a.75.75 0 0 0-.75.75v3.75a1 1 0 0 1-2 0v-3.75a.75.75 0 0 0-.75-.75h-3a.75.75 0 0 1-.75-.75Z"/>"#
            }
            Self::Calculator => {
                r#"<path d="M7.75 5C6.78 5 6 5.78 6 6.75v1c0 .97.78 1.75 1.75 1.75h5.5c.97 0 1.75-.78 1.75-1.75v-1C15 5.78 14.22 5 13.25 5h-5.5ZM7.5 6.75c0-.14.11-.25.25-.25h5.5c.14 0 .25.11.25.25v1c0 .14-.11.25-.25.25h-5.5a.25.25 0 0 1-.25-.25v-1Zm3 4a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5ZM9.25 15.5a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM7 10.75a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5ZM5.75 15.5a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM14 10.75a1.25 1.25 0 1 0 0 2.5 1.25 1.25 0 0 0 0-2.5Zm-1.25 4.75a1.25 1.25 0 1 1 2.5 0 1.25 1.25 0 0 1-2.5 0ZM6.14 2A3.14 3.14 0 0 0 3 5.14v11.22c0 1.74 1.4 3.14 3.14 3.14h8.72c1.74 0 3.14-1.4 3.14-3.14V5.14C18 3.4 16.6 2 14.86 2H6.14ZM4.5 5.14c0-.9.73-1.64 1.64-1.64h8.72c.9 0 1.64.73 1.64 1.64v11.22c0 .9-.73 1.64-1.64 1.64H6.14c-.9 0-1.64-.73-1.64-1.64V5.14Zm1.3 15.35c.45.9 1.38 1.51 2.46 1.51h6.99c2.9 0 5.25-2.35 5.25-5.25v-9.5c0-1.07-.62-2-1.51-2.46l.01.35V16.75a3.75 3.75 0 0 1-3.75 3.75H6.14l-.34-.01Z"/>"#
            }
            Self::Document => {
                r#"<path d="M8.75 11.5a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm0 2.75a.75.75 0 0 0 0 1.5h6.5a.75.75 0 0 0 0-1.5h-6.5Zm4.84-14.41L19.4 8.4A2 2 0 0 1 20 9.83V20a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V4c0-1.1.9-2 2-2h6.17c.52 0 1.05.22 1.42.59ZM18 20.5a.5.5 0 0 0 .5-.5V10H14a2 2 0 0 1-2-2V3.5H6a.5.5 0 0 0-.5.5v16c0 .27.22.5.5.5h12Zm-.62-12L13.5 4.62V8c0 .28.22.5.5.5h3.38Z"/>"#
            }
            Self::Volume => {
                r#"<path d="M13 3.5v17a.75.75 0 0 1-1.24.57L6.7 16.75H3.75A1.75 1.75 0 0 1 2 15V9c0-.97.78-1.75 1.75-1.75H6.7l5.06-4.32A.75.75 0 0 1 13 3.5Zm3.6 3.9a.75.75 0 0 1 1.06 0 6.5 6.5 0 0 1 0 9.2.75.75 0 1 1-1.06-1.06 5 5 0 0 0 0-7.08.75.75 0 0 1 0-1.06Z"/>"#
            }
            Self::Music => {
                r#"<path d="M19.5 2.75a.75.75 0 0 0-.97-.72l-10 3A.75.75 0 0 0 8 5.75v9.8a3.5 3.5 0 1 0 1.5 2.95V9.3l8.5-2.55v6.8a3.5 3.5 0 1 0 1.5 2.95V2.75Z"/>"#
            }
            Self::Battery => {
                r#"<path fill-rule="evenodd" d="M4.75 6h12.5A2.75 2.75 0 0 1 20 8.75v.75h.75c.69 0 1.25.56 1.25 1.25v2.5c0 .69-.56 1.25-1.25 1.25H20v.75A2.75 2.75 0 0 1 17.25 18H4.75A2.75 2.75 0 0 1 2 15.25v-6.5A2.75 2.75 0 0 1 4.75 6Zm0 1.5c-.69 0-1.25.56-1.25 1.25v6.5c0 .69.56 1.25 1.25 1.25h12.5c.69 0 1.25-.56 1.25-1.25v-6.5c0-.69-.56-1.25-1.25-1.25H4.75ZM5 9h8v6H5V9Z"/>"#
            }
            Self::Power => {
                r#"<path d="M12 2a.75.75 0 0 1 .75.75v8.5a.75.75 0 0 1-1.5 0v-8.5A.75.75 0 0 1 12 2ZM7.2 5.3a.75.75 0 0 1-.15 1.05 7 7 0 1 0 9.9 0 .75.75 0 1 1 .9-1.2 8.5 8.5 0 1 1-11.7 0 .75.75 0 0 1 1.05.15Z"/>"#
            }
            Self::AppWindow => {
                r#"<path d="M19 6.01c1.68.13 3 1.53 3 3.24v8A4.75 4.75 0 0 1 17.25 22h-8a3.25 3.25 0 0 1-3.24-3h1.51c.12.85.85 1.5 1.73 1.5h8c1.8 0 3.25-1.46 3.25-3.25v-8c0-.88-.65-1.6-1.5-1.73V6.01ZM14.75 2C16.55 2 18 3.46 18 5.25v9.5c0 1.8-1.46 3.25-3.25 3.25h-9.5A3.25 3.25 0 0 1 2 14.75v-9.5C2 3.45 3.46 2 5.25 2h9.5ZM3.5 14.75c0 .97.78 1.75 1.75 1.75h9.5c.97 0 1.75-.78 1.75-1.75V7.5h-13v7.25ZM5.25 3.5c-.97 0-1.75.78-1.75 1.75V6h13v-.75c0-.97-.78-1.75-1.75-1.75h-9.5Z"/>"#
            }
            Self::WindowMinimize => {
                r#"<path d="M3.75 12.5h16.5a.75.75 0 0 0 0-1.5H3.75a.75.75 0 0 0 0 1.5Z"/>"#
            }
            Self::WindowMaximize => {
                r#"<path d="M3 6.25C3 4.45 4.46 3 6.25 3h11.5C19.55 3 21 4.46 21 6.25v11.5c0 1.8-1.46 3.25-3.25 3.25H6.25A3.25 3.25 0 0 1 3 17.75V6.25ZM6.25 4.5c-.97 0-1.75.78-1.75 1.75v11.5c0 .97.78 1.75 1.75 1.75h11.5c.97 0 1.75-.78 1.75-1.75V6.25c0-.97-.78-1.75-1.75-1.75H6.25Z"/>"#
            }
            Self::WindowRestore => {
                r#"<path d="M7.52 5H6c.13-1.68 1.53-3 3.24-3h8A4.75 4.75 0 0 1 22 6.75v8a3.25 3.25 0 0 1-3 3.24v-1.5c.85-.13 1.5-.86 1.5-1.74v-8c0-1.8-1.46-3.25-3.25-3.25h-8c-.88 0-1.61.65-1.73 1.5ZM5.25 6A3.25 3.25 0 0 0 2 9.25v9.5C2 20.55 3.46 22 5.25 22h9.5c1.8 0 3.25-1.46 3.25-3.25v-9.5C18 7.45 16.55 6 14.75 6h-9.5ZM3.5 9.25c0-.97.78-1.75 1.75-1.75h9.5c.97 0 1.75.78 1.75 1.75v9.5c0 .97-.78 1.75-1.75 1.75h-9.5c-.97 0-1.75-.78-1.75-1.75v-9.5Z"/>"#
            }
            Self::Dismiss => {
                r#"<path d="m4.4 4.55.07-.08a.75.75 0 0 1 .98-.07l.08.07L12 10.94l6.47-6.47a.75.75 0 1 1 1.06 1.06L13.06 12l6.47 6.47c.27.27.3.68.07.98l-.07.08a.75.75 0 0 1-.98.07l-.08-.07L12 13.06l-6.47 6.47a.75.75 0 0 1-1.06-1.06L10.94 12 4.47 5.53a.75.75 0 0 1-.07-.98l.07-.08-.07.08Z"/>"#
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
/// Standardized shell icon sizes.
pub enum IconSize {
    /// 14px (dense controls).
    Xs,
    /// 16px (taskbar chips, window chrome).
    #[default]
    Sm,
    /// 20px (taskbar launchers).
    Md,
    /// 24px (folder listings).
    Lg,
    /// 48px (window content headers).
    Xl,
}

impl IconSize {
    /// Pixel size for the icon.
    pub const fn px(self) -> u16 {
        match self {
            Self::Xs => 14,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
            Self::Xl => 48,
        }
    }

    /// Stable size token used for CSS hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Renders an icon SVG at a standardized size.
pub fn Icon(
    /// Semantic icon identifier.
    icon: IconName,
    /// Standardized icon size.
    #[prop(default = IconSize::Sm)]
    size: IconSize,
) -> impl IntoView {
    let size_px = size.px().to_string();

    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            data-size=size.token()
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            width=size_px.clone()
            height=size_px
            fill="currentColor"
            focusable="false"
            aria-hidden="true"
            inner_html=icon.svg_body()
        />
    }
}
