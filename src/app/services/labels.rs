use crate::app::domain::view_state::{DocumentKind, Language};

/// Printed labels for one language.
#[derive(Debug)]
pub struct Labels {
    pub invoice_no: &'static str,
    pub quote_no: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub total: &'static str,
    pub subtotal: &'static str,
    pub discount: &'static str,
    pub grand_total: &'static str,
    pub phone: &'static str,
    pub ntn: &'static str,
    pub client: &'static str,
    pub thank_you_invoice: &'static str,
    pub thank_you_quote: &'static str,
    pub note_invoice: &'static str,
    pub note_quote: &'static str,
}

static ENGLISH: Labels = Labels {
    invoice_no: "Invoice No:",
    quote_no: "Quote No:",
    date: "Date:",
    description: "Description",
    total: "Total",
    subtotal: "Subtotal:",
    discount: "Discount:",
    grand_total: "Grand Total:",
    phone: "Phone:",
    ntn: "NTN:",
    client: "Client:",
    thank_you_invoice: "Thank you for your business!",
    thank_you_quote: "We look forward to working with you!",
    note_invoice: "Note: This is a system-generated receipt and requires no signature.",
    note_quote: "Note: This is a system-generated quote. Prices are valid for 30 days.",
};

static URDU: Labels = Labels {
    invoice_no: "رسید نمبر:",
    quote_no: "پیداواری قیمت:",
    date: "تاریخ:",
    description: "تفصیل",
    total: "کُل",
    subtotal: "مجموعی رقم:",
    discount: "چھوٹ:",
    grand_total: "کل رقم:",
    phone: "فون:",
    ntn: "NTN:",
    client: "گاہک:",
    thank_you_invoice: "آپ کے کاروبار کے لئے شکریہ!",
    thank_you_quote: "ہم آپ کے ساتھ کام کرنے کے منتظر ہیں!",
    note_invoice: "نوٹ: یہ ایک نظام سے تیار کردہ رسید ہے اور اس پر دستخط کی ضرورت نہیں ہے۔",
    note_quote: "نوٹ: یہ ایک نظام سے تیار کردہ قیمت ہے۔ قیمتیں 30 دنوں کے لیے درست ہیں۔",
};

pub fn labels(language: Language) -> &'static Labels {
    match language {
        Language::English => &ENGLISH,
        Language::Urdu => &URDU,
    }
}

impl Labels {
    pub fn number_label(&self, kind: DocumentKind) -> &'static str {
        match kind {
            DocumentKind::Invoice => self.invoice_no,
            DocumentKind::Quote => self.quote_no,
        }
    }

    pub fn thank_you(&self, kind: DocumentKind) -> &'static str {
        match kind {
            DocumentKind::Invoice => self.thank_you_invoice,
            DocumentKind::Quote => self.thank_you_quote,
        }
    }

    pub fn footnote(&self, kind: DocumentKind) -> &'static str {
        match kind {
            DocumentKind::Invoice => self.note_invoice,
            DocumentKind::Quote => self.note_quote,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_specific_labels() {
        let en = labels(Language::English);
        assert_eq!(en.number_label(DocumentKind::Invoice), "Invoice No:");
        assert_eq!(en.number_label(DocumentKind::Quote), "Quote No:");
        assert!(en.footnote(DocumentKind::Quote).contains("30 days"));
        assert!(en.thank_you(DocumentKind::Invoice).contains("business"));
    }

    #[test]
    fn test_every_language_has_labels() {
        for lang in [Language::English, Language::Urdu] {
            let l = labels(lang);
            assert!(!l.grand_total.is_empty());
            assert!(!l.description.is_empty());
        }
        assert_ne!(labels(Language::Urdu).date, labels(Language::English).date);
    }
}
