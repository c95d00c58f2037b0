//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use qayd_core::Locale;
use tracing::instrument;

use crate::filters;
use crate::i18n::Prefs;
use crate::seo;
use crate::state::AppState;

use super::shell::Shell;

// =============================================================================
// Marketing copy (static, per-locale)
// =============================================================================

/// A feature card on the home page.
#[derive(Clone)]
pub struct Feature {
    pub title: &'static str,
    pub body: &'static str,
}

/// Static localized content for the home page.
#[derive(Clone)]
pub struct HomeContent {
    pub hero_eyebrow: &'static str,
    pub hero_title: &'static str,
    pub hero_subtitle: &'static str,
    pub cta_demo: &'static str,
    pub cta_pricing: &'static str,
    pub features_heading: &'static str,
    pub features: Vec<Feature>,
    pub receipts_heading: &'static str,
    pub receipts_body: &'static str,
}

fn home_content(locale: Locale) -> HomeContent {
    match locale {
        Locale::En => HomeContent {
            hero_eyebrow: "Point of sale, made simple",
            hero_title: "Run your store. We handle the rest.",
            hero_subtitle: "Qayd gives cafes, restaurants and retail shops a fast point of sale \
                            with digital receipts, refunds and delivery built in.",
            cta_demo: "Request a demo",
            cta_pricing: "See pricing",
            features_heading: "Everything a modern store needs",
            features: vec![
                Feature {
                    title: "Digital receipts",
                    body: "Every order gets a shareable receipt link - itemized, tax-ready and \
                           updated live when refunds are applied.",
                },
                Feature {
                    title: "Works in Arabic and English",
                    body: "The register, the portal and every receipt render in your customer's \
                           language, right-to-left included.",
                },
                Feature {
                    title: "Delivery and pickup",
                    body: "Track in-store, pickup, delivery and dine-in orders through one \
                           screen, with addresses on the receipt when it matters.",
                },
                Feature {
                    title: "Refunds without spreadsheets",
                    body: "Partial and full refunds post straight to the order, and the receipt \
                           shows the net amount your customer actually paid.",
                },
            ],
            receipts_heading: "A receipt your customers can keep",
            receipts_body: "No app, no login. Customers scan a code and get a live receipt page \
                            with the store's details, line items and any refunds.",
        },
        Locale::Ar => HomeContent {
            hero_eyebrow: "نقاط بيع بدون تعقيد",
            hero_title: "أدر متجرك، ونحن نتولى الباقي.",
            hero_subtitle: "يمنح قيد المقاهي والمطاعم والمتاجر نقاط بيع سريعة مع إيصالات رقمية \
                            واستردادات وتوصيل مدمج.",
            cta_demo: "اطلب عرضاً توضيحياً",
            cta_pricing: "اطّلع على الأسعار",
            features_heading: "كل ما يحتاجه متجر حديث",
            features: vec![
                Feature {
                    title: "إيصالات رقمية",
                    body: "كل طلب يحصل على رابط إيصال قابل للمشاركة - مفصّل وجاهز ضريبياً \
                           ويتحدث مباشرة عند تطبيق الاستردادات.",
                },
                Feature {
                    title: "بالعربية والإنجليزية",
                    body: "الكاشير والبوابة وكل إيصال يظهر بلغة عميلك، بما في ذلك الاتجاه من \
                           اليمين إلى اليسار.",
                },
                Feature {
                    title: "توصيل واستلام",
                    body: "تابع طلبات المتجر والاستلام والتوصيل والمحلي من شاشة واحدة، مع \
                           العنوان على الإيصال عند الحاجة.",
                },
                Feature {
                    title: "استردادات بلا جداول",
                    body: "الاستردادات الجزئية والكاملة تُسجل على الطلب مباشرة، ويعرض الإيصال \
                           الصافي الذي دفعه عميلك فعلياً.",
                },
            ],
            receipts_heading: "إيصال يحتفظ به عملاؤك",
            receipts_body: "بدون تطبيق وبدون تسجيل دخول. يمسح العميل الرمز ويحصل على صفحة إيصال \
                            حية ببيانات المتجر والأصناف وأي استردادات.",
        },
    }
}

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub shell: Shell,
    pub content: HomeContent,
    /// JSON-LD `Organization` schema, emitted on the home page only.
    pub org_json_ld: String,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(State(state): State<AppState>, prefs: Prefs) -> HomeTemplate {
    let content = home_content(prefs.locale);
    let (title, description) = match prefs.locale {
        Locale::En => (
            "Qayd - Point of sale and digital receipts",
            "Fast point of sale for cafes, restaurants and retail, with digital receipts in Arabic and English.",
        ),
        Locale::Ar => (
            "قيد - نقاط بيع وإيصالات رقمية",
            "نقاط بيع سريعة للمقاهي والمطاعم والمتاجر، مع إيصالات رقمية بالعربية والإنجليزية.",
        ),
    };

    HomeTemplate {
        org_json_ld: seo::organization_json_ld(state.config()),
        shell: Shell::new(&state, prefs, title, description, "/"),
        content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_content_localized() {
        let en = home_content(Locale::En);
        let ar = home_content(Locale::Ar);
        assert_eq!(en.features.len(), ar.features.len());
        assert_ne!(en.hero_title, ar.hero_title);
    }
}
