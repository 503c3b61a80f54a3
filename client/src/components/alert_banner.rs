//! Single-slot alert banner with timed auto-dismiss.

use leptos::prelude::*;

use crate::state::alert::{Alert, AlertSlot};

/// Show `alert`, replacing any visible one, and schedule its dismissal.
pub fn show_alert(alerts: RwSignal<AlertSlot>, alert: Alert) {
    let Some(id) = alerts.try_update(|slot| slot.show(alert)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(crate::config::ALERT_DISMISS).await;
        alerts.try_update(|slot| slot.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn AlertBanner(alerts: RwSignal<AlertSlot>) -> impl IntoView {
    move || {
        alerts.with(|slot| {
            slot.current().cloned().map(|alert| {
                view! {
                    <div class=format!("alert alert--{}", alert.kind.modifier()) role="alert">
                        {alert.message}
                    </div>
                }
            })
        })
    }
}
