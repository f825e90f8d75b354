//! バッジ

use intelleo_guide_common::BadgeVariant;
use leptos::prelude::*;

#[component]
pub fn Badge(#[prop(optional)] variant: BadgeVariant, children: Children) -> impl IntoView {
    view! {
        <span class=format!("badge badge-{}", variant.as_str())>{children()}</span>
    }
}
