use crate::models::{BrandCampaign, Influencer, MatchFilters};

/// Why a candidate was rejected by the eligibility gate.
///
/// The reason is diagnostic only; it is logged but never shown to end users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    BrandSafetyBelowMinimum,
    FollowersBelowMinimum,
    EngagementBelowMinimum,
    PriceExceedsBudget,
    InExclusionList,
}

impl RejectReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectReason::BrandSafetyBelowMinimum => "Brand safety below minimum",
            RejectReason::FollowersBelowMinimum => "Follower count below minimum",
            RejectReason::EngagementBelowMinimum => "Engagement rate below minimum",
            RejectReason::PriceExceedsBudget => "Price exceeds budget",
            RejectReason::InExclusionList => "In exclusion list",
        }
    }
}

/// Non-negotiable eligibility gate for a candidate against a campaign.
///
/// Checks run in a fixed order and short-circuit on the first failure; the
/// order only determines which reason gets reported, not correctness. A
/// candidate failing any check is excluded from scoring entirely.
pub fn check_eligibility(
    influencer: &Influencer,
    campaign: &BrandCampaign,
) -> Result<(), RejectReason> {
    if influencer.brand_safety < campaign.brand_safety_min {
        return Err(RejectReason::BrandSafetyBelowMinimum);
    }
    if influencer.followers < campaign.min_followers {
        return Err(RejectReason::FollowersBelowMinimum);
    }
    if influencer.engagement_rate < campaign.min_engagement {
        return Err(RejectReason::EngagementBelowMinimum);
    }
    if influencer.price_per_post > campaign.max_price {
        return Err(RejectReason::PriceExceedsBudget);
    }
    if campaign.exclusions.contains(&influencer.handle) {
        return Err(RejectReason::InExclusionList);
    }
    Ok(())
}

/// Check a candidate against the caller-supplied optional filters.
///
/// Each present field is an independent AND-ed predicate; absent fields are
/// unconstrained.
pub fn matches_filters(influencer: &Influencer, filters: &MatchFilters) -> bool {
    if let Some(platforms) = &filters.platforms {
        if !platforms.is_empty() && !influencer.platforms.iter().any(|p| platforms.contains(p)) {
            return false;
        }
    }

    if let Some(niches) = &filters.niches {
        if !niches.is_empty() && !influencer.niches.iter().any(|n| niches.contains(n)) {
            return false;
        }
    }

    if let Some(geo) = &filters.geo {
        if !geo.is_empty() && !influencer.audience_geo.iter().any(|g| geo.contains(g)) {
            return false;
        }
    }

    if let Some(min_engagement) = filters.min_engagement {
        if influencer.engagement_rate < min_engagement {
            return false;
        }
    }

    if let Some(max_price) = filters.max_price {
        if influencer.price_per_post > max_price {
            return false;
        }
    }

    if let Some(min_followers) = filters.min_followers {
        if influencer.followers < min_followers {
            return false;
        }
    }

    true
}
