use serde::Serialize;

#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlanId {
    Monthly,
    Yearly,
}

impl PlanId {
    pub fn parse(s: &str) -> Option<PlanId> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Some(PlanId::Monthly),
            "yearly" => Some(PlanId::Yearly),
            _ => None,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct Plan {
    pub id: PlanId,
    pub price: f64,
    pub period: &'static str,
    pub savings: Option<&'static str>,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct PremiumFeature {
    pub title: &'static str,
    pub description: &'static str,
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: PlanId::Monthly,
        price: 9.99,
        period: "month",
        savings: None,
    },
    Plan {
        id: PlanId::Yearly,
        price: 79.99,
        period: "year",
        savings: Some("33% off"),
    },
];

pub const PREMIUM_FEATURES: &[PremiumFeature] = &[
    PremiumFeature {
        title: "Custom Scent Builder",
        description: "Create unlimited custom fragrance profiles with note matching",
    },
    PremiumFeature {
        title: "P2P Marketplace Access",
        description: "Buy and sell rare fragrances with verified collectors",
    },
    PremiumFeature {
        title: "Deal Finder",
        description: "The best fragrance deals across partner stores",
    },
];

pub fn find_plan(id: PlanId) -> &'static Plan {
    match id {
        PlanId::Monthly => &PLANS[0],
        PlanId::Yearly => &PLANS[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_plans_by_id() {
        assert_eq!(find_plan(PlanId::Monthly).price, 9.99);
        assert_eq!(find_plan(PlanId::Yearly).savings, Some("33% off"));
        assert_eq!(PlanId::parse(" Yearly"), Some(PlanId::Yearly));
        assert_eq!(PlanId::parse("weekly"), None);
    }
}
