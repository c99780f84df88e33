use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdShield, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{MenuForm, Role, ALL_ROLES};
use shared_ui::{Button, ButtonKind, ButtonVariant, PageHeader, TextField};

use crate::routes::Route;

/// Landing page: pick an interface, enter an identifier, open the dashboard.
///
/// Submitting without both a role and a non-empty identifier does nothing.
#[component]
pub fn Menu() -> Element {
    let mut form = use_signal(MenuForm::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(target) = form.read().submit() else {
            tracing::debug!("menu submission ignored: role or identifier missing");
            return;
        };
        tracing::info!(path = %target.path(), "opening dashboard");
        navigator().push(Route::from(target));
    };

    let selected = form.read().role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./menu.css") }

        div { class: "menu-page",
            PageHeader {
                title: "Mental Health Clinic AI System",
                subtitle: "Choose an interface to continue".to_string(),
            }

            form { class: "menu-form", onsubmit: handle_submit,
                div { class: "menu-roles", role: "group",
                    for role in ALL_ROLES.iter().copied() {
                        Button {
                            key: "{role}",
                            variant: if selected == Some(role) { ButtonVariant::Primary } else { ButtonVariant::Outline },
                            pressed: selected == Some(role),
                            onclick: move |_| form.write().select(role),
                            RoleIcon { role }
                            "{role.menu_label()}"
                        }
                    }
                }

                if let Some(prompt) = form.read().prompt() {
                    div { class: "menu-identifier",
                        TextField {
                            label: prompt,
                            value: form.read().id().to_string(),
                            required: true,
                            on_input: move |e: FormEvent| form.write().set_id(e.value()),
                        }
                        Button {
                            kind: ButtonKind::Submit,
                            class: "menu-submit",
                            disabled: form.read().submit().is_none(),
                            "Submit"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoleIcon(role: Role) -> Element {
    match role {
        Role::Patient => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
        Role::Clinician => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        Role::Admin => rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
    }
}
