use serde::Serialize;

pub const BASE_FEE: u32 = 15_000;
pub const ARM_FEE: u32 = 9_000;
pub const VISION_FEE: u32 = 4_000;
pub const PAYLOAD_FEE_PER_KG: u32 = 250;

/// Chassis the builder can start from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RobotBase {
    Mobile,
    Cobot,
    Fixed,
}

impl RobotBase {
    pub const ALL: [RobotBase; 3] = [RobotBase::Mobile, RobotBase::Cobot, RobotBase::Fixed];

    pub fn id(self) -> &'static str {
        match self {
            RobotBase::Mobile => "mobile",
            RobotBase::Cobot => "cobot",
            RobotBase::Fixed => "fixed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RobotBase::Mobile => "Mobile",
            RobotBase::Cobot => "Cobot",
            RobotBase::Fixed => "Fixed",
        }
    }

    pub fn surcharge(self) -> u32 {
        match self {
            RobotBase::Mobile => 8_000,
            RobotBase::Cobot => 12_000,
            RobotBase::Fixed => 6_000,
        }
    }
}

impl Default for RobotBase {
    fn default() -> Self {
        RobotBase::Mobile
    }
}

/// Payload capacity in kilograms. Always a multiple of [`Payload::STEP`]
/// inside `MIN..=MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u32")]
pub struct Payload(u32);

impl Payload {
    pub const MIN: u32 = 5;
    pub const MAX: u32 = 80;
    pub const STEP: u32 = 5;

    /// Snaps any raw value (e.g. from the range slider) onto the step grid
    /// and into bounds.
    pub fn new(raw: u32) -> Self {
        let clamped = raw.clamp(Self::MIN, Self::MAX);
        let snapped = (clamped + Self::STEP / 2) / Self::STEP * Self::STEP;
        Payload(snapped.clamp(Self::MIN, Self::MAX))
    }

    /// Parses the string value of an `<input type="range">`. Garbage keeps
    /// the current payload.
    pub fn parse_or(raw: &str, fallback: Payload) -> Self {
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
            .map(|v| Payload::new(v.round() as u32))
            .unwrap_or(fallback)
    }

    pub fn kg(self) -> u32 {
        self.0
    }
}

impl Default for Payload {
    fn default() -> Self {
        Payload(20)
    }
}

impl From<Payload> for u32 {
    fn from(payload: Payload) -> Self {
        payload.0
    }
}

/// What the visitor has picked in the builder so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RobotConfig {
    pub base: RobotBase,
    pub arm_enabled: bool,
    pub vision_enabled: bool,
    pub payload: Payload,
}

impl Default for RobotConfig {
    fn default() -> Self {
        Self {
            base: RobotBase::Mobile,
            arm_enabled: true,
            vision_enabled: true,
            payload: Payload::default(),
        }
    }
}

impl RobotConfig {
    pub fn with_base(self, base: RobotBase) -> Self {
        Self { base, ..self }
    }

    pub fn with_arm(self, arm_enabled: bool) -> Self {
        Self { arm_enabled, ..self }
    }

    pub fn with_vision(self, vision_enabled: bool) -> Self {
        Self { vision_enabled, ..self }
    }

    pub fn with_payload(self, payload: Payload) -> Self {
        Self { payload, ..self }
    }

    /// Estimated budget in whole dollars.
    pub fn price(&self) -> u32 {
        let mut price = BASE_FEE + self.base.surcharge();
        if self.arm_enabled {
            price += ARM_FEE;
        }
        if self.vision_enabled {
            price += VISION_FEE;
        }
        price + PAYLOAD_FEE_PER_KG * self.payload.kg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(base: RobotBase, arm: bool, vision: bool, payload: u32) -> RobotConfig {
        RobotConfig {
            base,
            arm_enabled: arm,
            vision_enabled: vision,
            payload: Payload::new(payload),
        }
    }

    fn every_config() -> Vec<RobotConfig> {
        let mut all = Vec::new();
        for base in RobotBase::ALL {
            for arm in [false, true] {
                for vision in [false, true] {
                    for kg in (Payload::MIN..=Payload::MAX).step_by(Payload::STEP as usize) {
                        all.push(config(base, arm, vision, kg));
                    }
                }
            }
        }
        all
    }

    #[test]
    fn default_config_prices_at_41000() {
        assert_eq!(RobotConfig::default(), config(RobotBase::Mobile, true, true, 20));
        assert_eq!(RobotConfig::default().price(), 41_000);
    }

    #[test]
    fn known_prices() {
        assert_eq!(config(RobotBase::Cobot, false, false, 5).price(), 28_250);
        assert_eq!(config(RobotBase::Fixed, true, false, 80).price(), 50_000);
    }

    #[test]
    fn price_never_drops_below_cheapest_build() {
        let cheapest = config(RobotBase::Fixed, false, false, Payload::MIN).price();
        assert_eq!(cheapest, 22_250);
        for c in every_config() {
            assert!(c.price() >= BASE_FEE + 6_000);
            assert!(c.price() >= cheapest, "{c:?}");
        }
    }

    #[test]
    fn price_strictly_increases_with_payload() {
        for c in every_config() {
            if c.payload.kg() == Payload::MAX {
                continue;
            }
            let heavier = c.with_payload(Payload::new(c.payload.kg() + Payload::STEP));
            assert!(heavier.price() > c.price(), "{c:?}");
        }
    }

    #[test]
    fn updates_touch_exactly_one_field() {
        let start = RobotConfig::default();

        let cobot = start.with_base(RobotBase::Cobot);
        assert_eq!(cobot, RobotConfig { base: RobotBase::Cobot, ..start });

        let no_arm = start.with_arm(false);
        assert_eq!(no_arm, RobotConfig { arm_enabled: false, ..start });

        let no_vision = start.with_vision(false);
        assert_eq!(no_vision, RobotConfig { vision_enabled: false, ..start });

        let heavy = start.with_payload(Payload::new(65));
        assert_eq!(heavy, RobotConfig { payload: Payload::new(65), ..start });
    }

    #[test]
    fn payload_snaps_to_grid() {
        assert_eq!(Payload::new(0).kg(), 5);
        assert_eq!(Payload::new(5).kg(), 5);
        assert_eq!(Payload::new(7).kg(), 5);
        assert_eq!(Payload::new(8).kg(), 10);
        assert_eq!(Payload::new(80).kg(), 80);
        assert_eq!(Payload::new(1_000).kg(), 80);
    }

    #[test]
    fn payload_parses_slider_values() {
        let fallback = Payload::new(40);
        assert_eq!(Payload::parse_or("35", fallback).kg(), 35);
        assert_eq!(Payload::parse_or(" 45 ", fallback).kg(), 45);
        assert_eq!(Payload::parse_or("not a number", fallback), fallback);
        assert_eq!(Payload::parse_or("-10", fallback), fallback);
    }

    #[test]
    fn config_serializes_with_lowercase_base() {
        let json = serde_json::to_value(RobotConfig::default()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "base": "mobile",
                "arm_enabled": true,
                "vision_enabled": true,
                "payload": 20
            })
        );
    }
}
