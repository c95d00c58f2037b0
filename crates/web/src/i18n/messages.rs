//! Static message catalog for English and Arabic.
//!
//! Handlers resolve all user-visible strings here while building view
//! structs; templates only print fields and never look up translations
//! themselves. Each label group is a plain struct of `&'static str` so a
//! missing translation is a compile error, not a runtime fallback.

use qayd_core::{
    FulfillmentMethod, FulfillmentStatus, Locale, OrderStatus, PaymentStatus, RefundStatus,
};

use crate::backend::ExportErrorCode;

/// Navigation labels for the site header.
#[derive(Debug, Clone, Copy)]
pub struct NavLabels {
    pub home: &'static str,
    pub pricing: &'static str,
    pub docs: &'static str,
    pub contact: &'static str,
    pub open_portal: &'static str,
    pub menu: &'static str,
    pub switch_theme: &'static str,
}

#[must_use]
pub const fn nav(locale: Locale) -> NavLabels {
    match locale {
        Locale::En => NavLabels {
            home: "Home",
            pricing: "Pricing",
            docs: "Docs",
            contact: "Contact",
            open_portal: "Open portal",
            menu: "Menu",
            switch_theme: "Switch theme",
        },
        Locale::Ar => NavLabels {
            home: "الرئيسية",
            pricing: "الأسعار",
            docs: "الدليل",
            contact: "تواصل معنا",
            open_portal: "فتح البوابة",
            menu: "القائمة",
            switch_theme: "تبديل المظهر",
        },
    }
}

/// Footer labels.
#[derive(Debug, Clone, Copy)]
pub struct FooterLabels {
    pub tagline: &'static str,
    pub contact_heading: &'static str,
    pub rights: &'static str,
}

#[must_use]
pub const fn footer(locale: Locale) -> FooterLabels {
    match locale {
        Locale::En => FooterLabels {
            tagline: "Point of sale and digital receipts for modern stores.",
            contact_heading: "Get in touch",
            rights: "All rights reserved.",
        },
        Locale::Ar => FooterLabels {
            tagline: "نقاط بيع وإيصالات رقمية للمتاجر الحديثة.",
            contact_heading: "تواصل معنا",
            rights: "جميع الحقوق محفوظة.",
        },
    }
}

/// Section and column labels for the receipt document.
#[derive(Debug, Clone, Copy)]
pub struct ReceiptLabels {
    pub title: &'static str,
    pub order_number: &'static str,
    pub date: &'static str,
    pub customer: &'static str,
    pub status: &'static str,
    pub payment: &'static str,
    pub fulfillment: &'static str,
    pub item: &'static str,
    pub quantity: &'static str,
    pub unit_price: &'static str,
    pub line_total: &'static str,
    pub subtotal: &'static str,
    pub discount: &'static str,
    pub tax: &'static str,
    pub fees: &'static str,
    pub total: &'static str,
    pub refunded: &'static str,
    pub net_total: &'static str,
    pub delivery_address: &'static str,
    pub notes: &'static str,
    pub refunds: &'static str,
    pub refund_reason: &'static str,
    pub tax_number: &'static str,
    pub thank_you: &'static str,
}

#[must_use]
pub const fn receipt(locale: Locale) -> ReceiptLabels {
    match locale {
        Locale::En => ReceiptLabels {
            title: "Receipt",
            order_number: "Order",
            date: "Date",
            customer: "Customer",
            status: "Status",
            payment: "Payment",
            fulfillment: "Fulfillment",
            item: "Item",
            quantity: "Qty",
            unit_price: "Unit price",
            line_total: "Total",
            subtotal: "Subtotal",
            discount: "Discount",
            tax: "Tax",
            fees: "Fees",
            total: "Total",
            refunded: "Refunded",
            net_total: "Net total",
            delivery_address: "Delivery address",
            notes: "Notes",
            refunds: "Refunds",
            refund_reason: "Reason",
            tax_number: "Tax number",
            thank_you: "Thank you for your order!",
        },
        Locale::Ar => ReceiptLabels {
            title: "إيصال",
            order_number: "الطلب",
            date: "التاريخ",
            customer: "العميل",
            status: "الحالة",
            payment: "الدفع",
            fulfillment: "التسليم",
            item: "الصنف",
            quantity: "الكمية",
            unit_price: "سعر الوحدة",
            line_total: "الإجمالي",
            subtotal: "المجموع الفرعي",
            discount: "الخصم",
            tax: "الضريبة",
            fees: "الرسوم",
            total: "الإجمالي",
            refunded: "المسترد",
            net_total: "الصافي",
            delivery_address: "عنوان التوصيل",
            notes: "ملاحظات",
            refunds: "المبالغ المستردة",
            refund_reason: "السبب",
            tax_number: "الرقم الضريبي",
            thank_you: "شكراً لطلبكم!",
        },
    }
}

/// Labels for error and not-found pages.
#[derive(Debug, Clone, Copy)]
pub struct ErrorLabels {
    pub title: &'static str,
    pub not_found_title: &'static str,
    pub not_found_body: &'static str,
    pub go_back: &'static str,
    pub go_home: &'static str,
}

#[must_use]
pub const fn errors(locale: Locale) -> ErrorLabels {
    match locale {
        Locale::En => ErrorLabels {
            title: "Something went wrong",
            not_found_title: "Page not found",
            not_found_body: "The page you are looking for does not exist or has moved.",
            go_back: "Go back",
            go_home: "Back to home",
        },
        Locale::Ar => ErrorLabels {
            title: "حدث خطأ ما",
            not_found_title: "الصفحة غير موجودة",
            not_found_body: "الصفحة التي تبحث عنها غير موجودة أو تم نقلها.",
            go_back: "رجوع",
            go_home: "العودة للرئيسية",
        },
    }
}

/// Labels for the contact / lead-capture form.
#[derive(Debug, Clone, Copy)]
pub struct ContactLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub company: &'static str,
    pub inquiry: &'static str,
    pub inquiry_general: &'static str,
    pub inquiry_demo: &'static str,
    pub inquiry_support: &'static str,
    pub message: &'static str,
    pub submit: &'static str,
    pub success_title: &'static str,
    pub success_body: &'static str,
    pub invalid_email: &'static str,
    pub missing_fields: &'static str,
    pub submit_failed: &'static str,
}

#[must_use]
pub const fn contact(locale: Locale) -> ContactLabels {
    match locale {
        Locale::En => ContactLabels {
            title: "Talk to us",
            subtitle: "Questions about Qayd? We usually reply within one business day.",
            name: "Name",
            email: "Email",
            phone: "Phone (optional)",
            company: "Company (optional)",
            inquiry: "What is this about?",
            inquiry_general: "General question",
            inquiry_demo: "Request a demo",
            inquiry_support: "Support",
            message: "Message",
            submit: "Send message",
            success_title: "Message sent",
            success_body: "Thanks for reaching out. We will get back to you shortly.",
            invalid_email: "Please enter a valid email address.",
            missing_fields: "Name and message are required.",
            submit_failed: "Something went wrong. Please try again.",
        },
        Locale::Ar => ContactLabels {
            title: "تحدث معنا",
            subtitle: "لديك سؤال عن قيد؟ عادةً ما نرد خلال يوم عمل واحد.",
            name: "الاسم",
            email: "البريد الإلكتروني",
            phone: "الهاتف (اختياري)",
            company: "الشركة (اختياري)",
            inquiry: "ما موضوع رسالتك؟",
            inquiry_general: "سؤال عام",
            inquiry_demo: "طلب عرض توضيحي",
            inquiry_support: "الدعم الفني",
            message: "الرسالة",
            submit: "إرسال",
            success_title: "تم إرسال الرسالة",
            success_body: "شكراً لتواصلك معنا. سنرد عليك قريباً.",
            invalid_email: "يرجى إدخال بريد إلكتروني صحيح.",
            missing_fields: "الاسم والرسالة حقلان مطلوبان.",
            submit_failed: "حدث خطأ ما. يرجى المحاولة مرة أخرى.",
        },
    }
}

/// Labels for the pricing page.
#[derive(Debug, Clone, Copy)]
pub struct PricingLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub per_month: &'static str,
    pub get_started: &'static str,
    pub unavailable: &'static str,
}

#[must_use]
pub const fn pricing(locale: Locale) -> PricingLabels {
    match locale {
        Locale::En => PricingLabels {
            title: "Pricing",
            subtitle: "Simple plans that grow with your store.",
            per_month: "/month",
            get_started: "Get started",
            unavailable: "Plans are temporarily unavailable. Please try again later.",
        },
        Locale::Ar => PricingLabels {
            title: "الأسعار",
            subtitle: "خطط بسيطة تنمو مع متجرك.",
            per_month: "/شهرياً",
            get_started: "ابدأ الآن",
            unavailable: "الخطط غير متاحة مؤقتاً. يرجى المحاولة لاحقاً.",
        },
    }
}

/// Labels for the documentation portal.
#[derive(Debug, Clone, Copy)]
pub struct DocsLabels {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub updated: &'static str,
    pub back: &'static str,
}

#[must_use]
pub const fn docs(locale: Locale) -> DocsLabels {
    match locale {
        Locale::En => DocsLabels {
            title: "Documentation",
            subtitle: "Guides for setting up and running Qayd.",
            updated: "Updated",
            back: "All docs",
        },
        Locale::Ar => DocsLabels {
            title: "الدليل",
            subtitle: "أدلة لإعداد وتشغيل قيد.",
            updated: "آخر تحديث",
            back: "جميع الأدلة",
        },
    }
}

// =============================================================================
// Status Labels
// =============================================================================

#[must_use]
pub const fn order_status_label(locale: Locale, status: OrderStatus) -> &'static str {
    match locale {
        Locale::En => match status {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        },
        Locale::Ar => match status {
            OrderStatus::Pending => "قيد الانتظار",
            OrderStatus::Confirmed => "مؤكد",
            OrderStatus::Preparing => "قيد التجهيز",
            OrderStatus::Ready => "جاهز",
            OrderStatus::Completed => "مكتمل",
            OrderStatus::Cancelled => "ملغي",
        },
    }
}

#[must_use]
pub const fn payment_status_label(locale: Locale, status: PaymentStatus) -> &'static str {
    match locale {
        Locale::En => match status {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::PartiallyRefunded => "Partially refunded",
            PaymentStatus::Refunded => "Refunded",
            PaymentStatus::Failed => "Failed",
        },
        Locale::Ar => match status {
            PaymentStatus::Pending => "قيد الانتظار",
            PaymentStatus::Paid => "مدفوع",
            PaymentStatus::PartiallyRefunded => "مسترد جزئياً",
            PaymentStatus::Refunded => "مسترد",
            PaymentStatus::Failed => "فشل",
        },
    }
}

#[must_use]
pub const fn fulfillment_method_label(locale: Locale, method: FulfillmentMethod) -> &'static str {
    match locale {
        Locale::En => match method {
            FulfillmentMethod::InStore => "In store",
            FulfillmentMethod::Pickup => "Pickup",
            FulfillmentMethod::Delivery => "Delivery",
            FulfillmentMethod::DineIn => "Dine in",
        },
        Locale::Ar => match method {
            FulfillmentMethod::InStore => "في المتجر",
            FulfillmentMethod::Pickup => "استلام",
            FulfillmentMethod::Delivery => "توصيل",
            FulfillmentMethod::DineIn => "محلي",
        },
    }
}

#[must_use]
pub const fn fulfillment_status_label(locale: Locale, status: FulfillmentStatus) -> &'static str {
    match locale {
        Locale::En => match status {
            FulfillmentStatus::Unfulfilled => "Unfulfilled",
            FulfillmentStatus::InProgress => "In progress",
            FulfillmentStatus::Fulfilled => "Fulfilled",
            FulfillmentStatus::Cancelled => "Cancelled",
        },
        Locale::Ar => match status {
            FulfillmentStatus::Unfulfilled => "غير منفذ",
            FulfillmentStatus::InProgress => "قيد التنفيذ",
            FulfillmentStatus::Fulfilled => "منفذ",
            FulfillmentStatus::Cancelled => "ملغي",
        },
    }
}

#[must_use]
pub const fn refund_status_label(locale: Locale, status: RefundStatus) -> &'static str {
    match locale {
        Locale::En => match status {
            RefundStatus::Pending => "Pending",
            RefundStatus::Completed => "Completed",
            RefundStatus::Failed => "Failed",
        },
        Locale::Ar => match status {
            RefundStatus::Pending => "قيد الانتظار",
            RefundStatus::Completed => "مكتمل",
            RefundStatus::Failed => "فشل",
        },
    }
}

/// Localized message for a receipt fetch failure.
#[must_use]
pub const fn export_error_message(locale: Locale, code: ExportErrorCode) -> &'static str {
    match locale {
        Locale::En => match code {
            ExportErrorCode::OrderNotFound => {
                "We couldn't find this order. Check the link on your receipt and try again."
            }
            ExportErrorCode::InvalidStore => {
                "This receipt link doesn't match the store it was issued for."
            }
            ExportErrorCode::FetchError => {
                "We couldn't load this receipt right now. Please try again in a moment."
            }
            ExportErrorCode::Unknown => "An unexpected error occurred while loading this receipt.",
        },
        Locale::Ar => match code {
            ExportErrorCode::OrderNotFound => {
                "لم نتمكن من العثور على هذا الطلب. تحقق من الرابط في إيصالك وحاول مرة أخرى."
            }
            ExportErrorCode::InvalidStore => "رابط الإيصال هذا لا يطابق المتجر الذي صدر عنه.",
            ExportErrorCode::FetchError => {
                "تعذر تحميل الإيصال حالياً. يرجى المحاولة مرة أخرى بعد قليل."
            }
            ExportErrorCode::Unknown => "حدث خطأ غير متوقع أثناء تحميل هذا الإيصال.",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_localized() {
        assert_eq!(
            order_status_label(Locale::En, OrderStatus::Completed),
            "Completed"
        );
        assert_eq!(order_status_label(Locale::Ar, OrderStatus::Completed), "مكتمل");
    }

    #[test]
    fn test_export_error_messages_differ_by_code() {
        let not_found = export_error_message(Locale::En, ExportErrorCode::OrderNotFound);
        let fetch = export_error_message(Locale::En, ExportErrorCode::FetchError);
        assert_ne!(not_found, fetch);
    }
}
