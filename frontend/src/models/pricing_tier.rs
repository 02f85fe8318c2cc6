#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PricingTier {
    #[default]
    Starter,
    Growth,
    Scale,
}

impl PricingTier {
    pub const ALL: [PricingTier; 3] = [PricingTier::Starter, PricingTier::Growth, PricingTier::Scale];

    pub fn id(self) -> &'static str {
        match self {
            PricingTier::Starter => "starter",
            PricingTier::Growth => "growth",
            PricingTier::Scale => "scale",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PricingTier::Starter => "Prototype",
            PricingTier::Growth => "Pilot",
            PricingTier::Scale => "Production",
        }
    }

    /// Starting price in whole dollars.
    pub fn price(self) -> u32 {
        match self {
            PricingTier::Starter => 12_000,
            PricingTier::Growth => 48_000,
            PricingTier::Scale => 145_000,
        }
    }

    pub fn features(self) -> [&'static str; 3] {
        match self {
            PricingTier::Starter => ["Concept design", "Simulation report", "2 week lead"],
            PricingTier::Growth => ["1 robot build", "Safety validation", "On-site deploy"],
            PricingTier::Scale => ["Multi-cell system", "24/7 support", "Spares + training"],
        }
    }

    /// Gradient stops for the card wash.
    pub fn accent(self) -> (&'static str, &'static str) {
        match self {
            PricingTier::Starter => ("#06b6d4", "#3b82f6"),
            PricingTier::Growth => ("#10b981", "#84cc16"),
            PricingTier::Scale => ("#d946ef", "#8b5cf6"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_is_selected_first() {
        assert_eq!(PricingTier::default(), PricingTier::Starter);
        assert_eq!(PricingTier::ALL[0], PricingTier::default());
    }

    #[test]
    fn tiers_get_more_expensive() {
        let prices: Vec<u32> = PricingTier::ALL.iter().map(|t| t.price()).collect();
        assert_eq!(prices, vec![12_000, 48_000, 145_000]);
    }

    #[test]
    fn ids_are_unique() {
        let mut ids: Vec<&str> = PricingTier::ALL.iter().map(|t| t.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
