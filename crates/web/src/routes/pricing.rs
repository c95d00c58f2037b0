//! Pricing page route handler.
//!
//! Plans come from the platform's public plans endpoint, localized via
//! `Accept-Language` and cached per-locale. A fetch failure degrades to an
//! "unavailable" notice inside the page rather than an error page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use qayd_core::{Locale, format_amount};
use tracing::instrument;

use crate::backend::Plan;
use crate::filters;
use crate::i18n::Prefs;
use crate::i18n::messages::{self, PricingLabels};
use crate::state::AppState;

use super::shell::Shell;

/// Plan display data for templates.
#[derive(Clone)]
pub struct PlanView {
    pub name: String,
    pub description: Option<String>,
    pub price: String,
    pub features: Vec<String>,
    pub highlighted: bool,
    pub cta_url: String,
}

impl PlanView {
    fn from_plan(plan: &Plan, portal_url: &str) -> Self {
        Self {
            name: plan.name.clone(),
            description: plan.description.clone(),
            price: format_amount(&plan.currency_code, plan.price_monthly),
            features: plan.features.clone(),
            highlighted: plan.highlighted,
            cta_url: format!("{portal_url}/signup?plan={}", plan.id),
        }
    }
}

/// Pricing page template.
#[derive(Template, WebTemplate)]
#[template(path = "pricing.html")]
pub struct PricingTemplate {
    pub shell: Shell,
    pub labels: PricingLabels,
    pub plans: Vec<PlanView>,
    pub load_failed: bool,
}

/// Display the pricing page.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, prefs: Prefs) -> PricingTemplate {
    let portal_url = state.config().portal_base_url.clone();

    let (plans, load_failed) = state.backend().plans(prefs.locale).await.map_or_else(
        |e| {
            tracing::error!("Failed to fetch plans: {e}");
            (Vec::new(), true)
        },
        |plans| {
            (
                plans
                    .iter()
                    .map(|p| PlanView::from_plan(p, &portal_url))
                    .collect(),
                false,
            )
        },
    );

    let title = match prefs.locale {
        Locale::En => "Pricing - Qayd",
        Locale::Ar => "الأسعار - قيد",
    };

    PricingTemplate {
        shell: Shell::new(
            &state,
            prefs,
            title,
            messages::pricing(prefs.locale).subtitle,
            "/pricing",
        ),
        labels: messages::pricing(prefs.locale),
        plans,
        load_failed,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_plan_view_formats_price() {
        let plan = Plan {
            id: "growth".to_string(),
            name: "Growth".to_string(),
            description: None,
            price_monthly: Decimal::new(19_900, 2),
            currency_code: "SAR".to_string(),
            features: vec!["Unlimited receipts".to_string()],
            highlighted: true,
        };
        let view = PlanView::from_plan(&plan, "https://portal.qayd.app");
        assert_eq!(view.price, "SAR 199.00");
        assert_eq!(view.cta_url, "https://portal.qayd.app/signup?plan=growth");
    }
}
