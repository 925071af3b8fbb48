use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TermsSection {
    pub title: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TermsOfService {
    #[schema(example = "Commission Terms of Service")]
    pub title: String,
    #[schema(example = "2023-01-01")]
    pub last_updated: String,
    pub sections: Vec<TermsSection>,
}

struct StaticSection {
    title: &'static str,
    items: &'static [&'static str],
}

const TITLE: &str = "Commission Terms of Service";
const LAST_UPDATED: &str = "2023-01-01";

const SECTIONS: &[StaticSection] = &[
    StaticSection {
        title: "General Terms",
        items: &[
            "By commissioning artwork, you agree to these terms.",
            "All artwork remains the intellectual property of the artist.",
            "You will receive the rights to display the commissioned artwork for personal use.",
            "Commercial use requires additional licensing and fees.",
            "The artist reserves the right to display commissioned work in their portfolio.",
        ],
    },
    StaticSection {
        title: "Payment",
        items: &[
            "Full payment is required before the commission work begins.",
            "Prices are subject to change based on complexity and requirements.",
            "VIP clients receive a 25% discount on all commissions.",
            "Refunds are available only if work has not yet started.",
        ],
    },
    StaticSection {
        title: "Process",
        items: &[
            "You will receive progress updates throughout the commission process.",
            "Revisions are limited to the agreed-upon number in your commission package.",
            "Major changes after approval of sketches may incur additional fees.",
            "Completion time varies based on commission complexity and current workload.",
        ],
    },
    StaticSection {
        title: "Content Restrictions",
        items: &[
            "The artist reserves the right to refuse any commission for any reason.",
            "NSFW content will be marked accordingly and only visible to authenticated users.",
            "Certain subject matter may be declined at the artist's discretion.",
        ],
    },
];

pub fn terms_of_service() -> TermsOfService {
    TermsOfService {
        title: TITLE.to_string(),
        last_updated: LAST_UPDATED.to_string(),
        sections: SECTIONS
            .iter()
            .map(|s| TermsSection {
                title: s.title.to_string(),
                items: s.items.iter().map(|i| i.to_string()).collect(),
            })
            .collect(),
    }
}
