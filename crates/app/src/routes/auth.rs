use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBookOpen, LdBuilding, LdFileText, LdGraduationCap, LdSettings, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{AppError, DemoIdentity, FeatureFlags, Role};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, CardTone,
    Dialog, DialogDescription, DialogTitle,
};

use crate::demo_store::IdentityStore;
use crate::notify::Notice;
use crate::routes::Route;
use crate::session::{existing_session_route, use_session_context};

/// Write the demo identity for `role`, stamped with `now_millis`.
pub fn select_role(
    role: Role,
    store: &dyn IdentityStore,
    now_millis: i64,
) -> Result<DemoIdentity, AppError> {
    let identity = DemoIdentity::for_role(role, now_millis);
    store.save(&identity)?;
    tracing::info!(role = role.as_str(), "demo session started");
    Ok(identity)
}

/// Sign in as `role` and name the page to open next.
pub fn enter_as(role: Role, store: &dyn IdentityStore, now_millis: i64) -> Result<Route, AppError> {
    select_role(role, store, now_millis)?;
    Ok(Route::Dashboard {})
}

/// Role-selection screen.
#[component]
pub fn Auth() -> Element {
    let ctx = use_session_context();
    let flags: FeatureFlags = use_context();
    let toasts = shared_ui::use_toast();
    let nav = navigator();
    let mut loading = use_signal(|| false);
    let mut staff_open = use_signal(|| false);

    // An issued session goes straight to its dashboard. A leftover demo
    // record does not; picking a role replaces it.
    let mount_ctx = ctx.clone();
    use_effect(move || {
        let provider = mount_ctx.issued();
        spawn(async move {
            if let Some(route) = existing_session_route(&provider).await {
                nav.replace(route);
            }
        });
    });

    let enter = use_callback(move |role: Role| {
        loading.set(true);
        staff_open.set(false);
        let store = ctx.store();
        match enter_as(role, store.as_ref(), chrono::Utc::now().timestamp_millis()) {
            Ok(route) => {
                Notice::welcome(role).show(&toasts);
                nav.push(route);
            }
            Err(e) => {
                tracing::error!(error = %e, "could not store demo identity");
                Notice::login_error().show(&toasts);
            }
        }
        loading.set(false);
    });

    let (enter_label, apply_label) = if loading() {
        ("Logging in...".to_string(), "Logging in...".to_string())
    } else {
        ("Enter Portal".to_string(), "Apply Now".to_string())
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-inner",
                div { class: "auth-heading",
                    span { class: "auth-logo",
                        Icon::<LdGraduationCap> { icon: LdGraduationCap, width: 48, height: 48 }
                    }
                    h1 { "Acharya Education Portal" }
                    p { class: "auth-subtitle", "Government of Rajasthan" }
                    p { class: "auth-subtitle-muted", "शिक्षा विभाग | Education Department" }
                }

                if flags.demo_login {
                    div { class: "auth-roles",
                        RoleCard {
                            title: "Student",
                            description: "Access your academic records, attendance, and course materials",
                            action: enter_label.clone(),
                            disabled: loading(),
                            onselect: move |_| enter.call(Role::Student),
                            Icon::<LdBookOpen> { icon: LdBookOpen, width: 32, height: 32 }
                        }
                        RoleCard {
                            title: "Staff",
                            description: "Faculty, Warden, and Management access",
                            action: "Select Role",
                            disabled: loading(),
                            onselect: move |_| staff_open.set(true),
                            Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 }
                        }
                        RoleCard {
                            title: "Parent",
                            description: "Monitor your child's academic progress and fees",
                            action: enter_label.clone(),
                            disabled: loading(),
                            onselect: move |_| enter.call(Role::Parent),
                            Icon::<LdUserCheck> { icon: LdUserCheck, width: 32, height: 32 }
                        }
                        RoleCard {
                            title: "Admission",
                            description: "Apply for admission and track application status",
                            action: apply_label,
                            disabled: loading(),
                            onselect: move |_| enter.call(Role::Admission),
                            Icon::<LdFileText> { icon: LdFileText, width: 32, height: 32 }
                        }
                    }
                } else {
                    Card { tone: CardTone::Muted, class: "auth-disabled",
                        CardHeader {
                            CardTitle { "Demo sign-in is turned off" }
                            CardDescription {
                                "Sign in through your school's account to open the portal."
                            }
                        }
                    }
                }

                div { class: "auth-branding",
                    Icon::<LdShield> { icon: LdShield, width: 24, height: 24 }
                    div {
                        p { class: "auth-branding-title", "राजस्थान सरकार | Government of Rajasthan" }
                        p { class: "auth-branding-note", "Secure Portal • आधिकारिक पोर्टल" }
                    }
                }
            }

            Dialog { open: staff_open(), on_close: move |_| staff_open.set(false),
                DialogTitle { "Select Staff Role" }
                DialogDescription { "Choose your specific role to continue" }
                div { class: "auth-staff-options",
                    StaffOption {
                        title: "Faculty",
                        description: "Teaching staff and subject experts",
                        onselect: move |_| enter.call(Role::Faculty),
                        Icon::<LdBookOpen> { icon: LdBookOpen, width: 24, height: 24 }
                    }
                    StaffOption {
                        title: "Warden",
                        description: "Hostel and residential management",
                        onselect: move |_| enter.call(Role::Warden),
                        Icon::<LdBuilding> { icon: LdBuilding, width: 24, height: 24 }
                    }
                    StaffOption {
                        title: "Manager",
                        description: "Administrative and management roles",
                        onselect: move |_| enter.call(Role::Admin),
                        Icon::<LdSettings> { icon: LdSettings, width: 24, height: 24 }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        block: true,
                        onclick: move |_| staff_open.set(false),
                        "Cancel"
                    }
                }
            }
        }
    }
}

/// `/login` renders the same role picker.
#[component]
pub fn Login() -> Element {
    rsx! { Auth {} }
}

#[component]
fn RoleCard(
    title: String,
    description: String,
    action: String,
    disabled: bool,
    onselect: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        Card { class: "auth-role-card",
            CardContent {
                span { class: "auth-role-icon", {children} }
                h3 { "{title}" }
                p { class: "auth-role-description", "{description}" }
                Button {
                    block: true,
                    disabled: disabled,
                    onclick: move |_| onselect.call(()),
                    "{action}"
                }
            }
        }
    }
}

#[component]
fn StaffOption(title: String, description: String, onselect: EventHandler<()>, children: Element) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Outline,
            block: true,
            class: "auth-staff-option",
            onclick: move |_| onselect.call(()),
            {children}
            span { class: "auth-staff-text",
                span { class: "auth-staff-title", "{title}" }
                span { class: "auth-staff-description", "{description}" }
            }
        }
    }
}
