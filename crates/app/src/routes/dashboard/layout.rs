use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMail, LdMenu, LdMoon, LdPhone, LdSun};
use dioxus_free_icons::Icon;
use shared_types::{Profile, SessionIdentity};
use shared_ui::theme::ThemeState;
use shared_ui::{
    use_toast, Avatar, AvatarFallback, Button, ButtonSize, ButtonVariant, Separator, Sheet,
    SheetClose, SheetContent, SheetSide,
};

use super::SidebarSpec;
use crate::components::Glyph;
use crate::format_helpers::initials;
use crate::notify::Notice;
use crate::session::{end_session, use_session_context};

/// Name and role line for the header, with the email and "User" standing
/// in when there is no profile.
pub fn identity_summary(identity: &SessionIdentity, profile: Option<&Profile>) -> (String, String) {
    let name = profile
        .map(|p| p.full_name.trim())
        .filter(|n| !n.is_empty())
        .unwrap_or(identity.email.as_str())
        .to_string();
    let role = profile
        .map(|p| p.role.clone())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| "User".to_string());
    (name, role)
}

/// Header, optional side column, and the page.
///
/// With a sidebar, wide viewports show it as a fixed column and narrow
/// ones get a menu button that opens it as a drawer.
#[component]
pub fn DashboardLayout(
    title: String,
    identity: SessionIdentity,
    profile: Option<Profile>,
    sidebar: Option<SidebarSpec>,
    children: Element,
) -> Element {
    let ctx = use_session_context();
    let toasts = use_toast();
    let nav = navigator();
    let mut theme = use_context::<ThemeState>();
    let mut drawer_open = use_signal(|| false);
    let mut signing_out = use_signal(|| false);

    let (name, role) = identity_summary(&identity, profile.as_ref());
    let avatar_text = initials(&name);

    let sign_out = move |_: MouseEvent| {
        if signing_out() {
            return;
        }
        signing_out.set(true);
        let provider = ctx.provider();
        spawn(async move {
            let next = end_session(&provider).await;
            Notice::logged_out().show(&toasts);
            nav.replace(next);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "dashboard-shell",
            header { class: "dashboard-header",
                div { class: "dashboard-header-start",
                    if sidebar.is_some() {
                        Button {
                            variant: ButtonVariant::Ghost,
                            size: ButtonSize::Icon,
                            class: "dashboard-menu-button",
                            aria_label: "Open menu",
                            onclick: move |_| drawer_open.set(true),
                            Icon::<LdMenu> { icon: LdMenu, width: 20, height: 20 }
                        }
                    }
                    h1 { class: "dashboard-header-title", "{title}" }
                }
                div { class: "dashboard-header-end",
                    div { class: "dashboard-identity",
                        p { class: "dashboard-identity-name", "{name}" }
                        p { class: "dashboard-identity-role", "{role}" }
                    }
                    Avatar {
                        AvatarFallback { "{avatar_text}" }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Icon,
                        aria_label: "Toggle theme",
                        onclick: move |_| theme.toggle(),
                        if theme.theme.read().is_dark() {
                            Icon::<LdSun> { icon: LdSun, width: 18, height: 18 }
                        } else {
                            Icon::<LdMoon> { icon: LdMoon, width: 18, height: 18 }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        size: ButtonSize::Small,
                        disabled: signing_out(),
                        onclick: sign_out,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Logout"
                    }
                }
            }

            div { class: "dashboard-body",
                if let Some(spec) = sidebar.clone() {
                    aside { class: "dashboard-sidebar",
                        SidebarPanel { spec: spec.clone(), on_navigate: move |_| {} }
                    }
                    Sheet {
                        open: drawer_open(),
                        on_close: move |_| drawer_open.set(false),
                        side: SheetSide::Left,
                        SheetContent {
                            SheetClose { on_close: move |_| drawer_open.set(false) }
                            SidebarPanel { spec, on_navigate: move |_| drawer_open.set(false) }
                        }
                    }
                }
                main { class: "dashboard-main", {children} }
            }
        }
    }
}

#[component]
fn SidebarPanel(spec: SidebarSpec, on_navigate: EventHandler<()>) -> Element {
    rsx! {
        div { class: "sidebar-panel",
            div { class: "sidebar-identity",
                span { class: "sidebar-identity-icon", Glyph { icon: spec.icon, size: 32 } }
                h3 { "{spec.heading}" }
                for line in spec.lines.iter() {
                    p { class: "sidebar-identity-line", "{line}" }
                }
            }
            nav { class: "sidebar-links",
                for (icon, label) in spec.links.iter().copied() {
                    Button {
                        variant: ButtonVariant::Ghost,
                        block: true,
                        class: "sidebar-link",
                        onclick: move |_| on_navigate.call(()),
                        Glyph { icon, size: 16 }
                        "{label}"
                    }
                }
            }
            if let Some(contact) = &spec.contact {
                Separator {}
                div { class: "sidebar-contact",
                    h4 { "School Contact" }
                    span {
                        Icon::<LdPhone> { icon: LdPhone, width: 14, height: 14 }
                        "{contact.phone}"
                    }
                    span {
                        Icon::<LdMail> { icon: LdMail, width: 14, height: 14 }
                        "{contact.email}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{Role, SessionSource};

    fn identity() -> SessionIdentity {
        SessionIdentity {
            id: "7f3c".into(),
            email: "meena@school.raj.gov.in".into(),
            role: Role::Faculty,
            source: SessionSource::Issued,
        }
    }

    #[test]
    fn summary_prefers_profile() {
        let profile = Profile {
            full_name: "Meena Joshi".into(),
            role: "faculty".into(),
            department: Some("Mathematics".into()),
            student_id: None,
        };
        assert_eq!(
            identity_summary(&identity(), Some(&profile)),
            ("Meena Joshi".to_string(), "faculty".to_string())
        );
    }

    #[test]
    fn summary_without_profile_uses_email_and_user() {
        assert_eq!(
            identity_summary(&identity(), None),
            ("meena@school.raj.gov.in".to_string(), "User".to_string())
        );
    }
}
