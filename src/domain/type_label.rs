//! Human labels for raw number classifications.
//!
//! The metadata engine classifies numbers into [`NumberType`] constants; this
//! table maps them to stable human labels and back. A lookup miss yields
//! `None` in both directions - callers decide whether that is an error.

/// The engine's raw number classification, re-exported as-is.
pub use phonenumber::Type as NumberType;

// StandardRate, Carrier and NoInternational are metadata-internal markers
// with no user-facing label; they fall through to None.
const LABELS: &[(NumberType, &str)] = &[
    (NumberType::FixedLine, "fixed_line"),
    (NumberType::Mobile, "mobile"),
    (NumberType::FixedLineOrMobile, "fixed_line_or_mobile"),
    (NumberType::TollFree, "toll_free"),
    (NumberType::PremiumRate, "premium_rate"),
    (NumberType::SharedCost, "shared_cost"),
    (NumberType::PersonalNumber, "personal_number"),
    (NumberType::Voip, "voip"),
    (NumberType::Pager, "pager"),
    (NumberType::Uan, "uan"),
    (NumberType::Emergency, "emergency"),
    (NumberType::Voicemail, "voicemail"),
    (NumberType::ShortCode, "short_code"),
    (NumberType::Unknown, "unknown"),
];

/// Get the label for a raw classification, or `None` if it has no label.
pub fn label_for(kind: NumberType) -> Option<&'static str> {
    LABELS
        .iter()
        .find(|(candidate, _)| *candidate == kind)
        .map(|(_, label)| *label)
}

/// Reverse lookup from a label to the raw classification.
pub fn type_for(label: &str) -> Option<NumberType> {
    let label = label.trim().to_ascii_lowercase();
    LABELS
        .iter()
        .find(|(_, candidate)| *candidate == label)
        .map(|(kind, _)| *kind)
}
