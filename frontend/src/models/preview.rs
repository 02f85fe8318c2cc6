use super::robot_config::{RobotBase, RobotConfig};

/// Everything the builder preview needs to draw a configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreviewSpec {
    pub base: RobotBase,
    pub show_arm: bool,
    pub show_vision: bool,
    pub accent: &'static str,
    pub title: &'static str,
}

impl PreviewSpec {
    pub fn from_config(config: &RobotConfig) -> Self {
        Self {
            base: config.base,
            show_arm: config.arm_enabled,
            show_vision: config.vision_enabled,
            accent: accent_color(config.base),
            title: preview_title(config.base),
        }
    }
}

pub fn accent_color(base: RobotBase) -> &'static str {
    match base {
        RobotBase::Mobile => "#22d3ee",
        RobotBase::Cobot => "#34d399",
        RobotBase::Fixed => "#a78bfa",
    }
}

pub fn preview_title(base: RobotBase) -> &'static str {
    match base {
        RobotBase::Mobile => "Mobile manipulator",
        RobotBase::Cobot => "Collaborative arm",
        RobotBase::Fixed => "Fixed cell",
    }
}

/// Bullet list shown under the preview image.
pub fn summary_lines(config: &RobotConfig) -> Vec<String> {
    vec![
        format!("Payload: {} kg", config.payload.kg()),
        format!("Vision: {}", if config.vision_enabled { "Enabled" } else { "None" }),
        format!("Arm: {}", if config.arm_enabled { "Included" } else { "None" }),
        format!("Base: {}", config.base.id()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::robot_config::Payload;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_preview() {
        let spec = PreviewSpec::from_config(&RobotConfig::default());
        assert_eq!(
            spec,
            PreviewSpec {
                base: RobotBase::Mobile,
                show_arm: true,
                show_vision: true,
                accent: "#22d3ee",
                title: "Mobile manipulator",
            }
        );
    }

    #[test]
    fn overlays_follow_toggles() {
        let config = RobotConfig::default()
            .with_base(RobotBase::Fixed)
            .with_arm(false);
        let spec = PreviewSpec::from_config(&config);
        assert_eq!(spec.base, RobotBase::Fixed);
        assert!(!spec.show_arm);
        assert!(spec.show_vision);
        assert_eq!(spec.title, "Fixed cell");
        assert_eq!(spec.accent, "#a78bfa");
    }

    #[test]
    fn summary_describes_every_field() {
        let config = RobotConfig::default()
            .with_base(RobotBase::Cobot)
            .with_vision(false)
            .with_payload(Payload::new(55));
        assert_eq!(
            summary_lines(&config),
            vec![
                "Payload: 55 kg".to_string(),
                "Vision: None".to_string(),
                "Arm: Included".to_string(),
                "Base: cobot".to_string(),
            ]
        );
    }
}
