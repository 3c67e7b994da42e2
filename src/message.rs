use crate::workout::WorkoutKind;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How summaries are written to stdout
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Summary of a finished workout, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoMessage {
    pub training_type: String,
    pub duration: f64,
    pub distance: f64,
    pub speed: f64,
    pub calories: f64,
}

impl InfoMessage {
    pub fn new(kind: WorkoutKind, duration: f64, distance: f64, speed: f64, calories: f64) -> Self {
        Self {
            training_type: kind.to_string(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    pub fn get_message(&self) -> String {
        self.to_string()
    }

    /// Single-line JSON rendering
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.get_message()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_template() {
        let msg = InfoMessage::new(WorkoutKind::Swimming, 1.0, 0.9936, 1.0, 336.0);
        assert_eq!(
            msg.get_message(),
            "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; \
             Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
        );
    }

    #[test]
    fn test_always_three_decimals() {
        let msg = InfoMessage::new(WorkoutKind::Running, 0.5, 12.0, 24.123456, 1234.5);
        let text = msg.get_message();
        assert!(text.contains("Длительность: 0.500 ч."));
        assert!(text.contains("Дистанция: 12.000 км"));
        assert!(text.contains("Ср. скорость: 24.123 км/ч"));
        assert!(text.contains("Потрачено ккал: 1234.500."));
    }

    #[test]
    fn test_walking_uses_sports_walking_label() {
        let msg = InfoMessage::new(WorkoutKind::Walking, 1.0, 5.85, 5.85, 349.25);
        assert!(msg.get_message().starts_with("Тип тренировки: SportsWalking;"));
    }

    #[test]
    fn test_render_per_format() {
        let msg = InfoMessage::new(WorkoutKind::Running, 1.0, 9.75, 9.75, 797.805);
        assert_eq!(msg.render(OutputFormat::Text).unwrap(), msg.get_message());
        assert!(msg.render(OutputFormat::Json).unwrap().starts_with('{'));
    }

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_json_fields() {
        let msg = InfoMessage::new(WorkoutKind::Swimming, 1.0, 0.5, 1.0, 336.0);
        let value: serde_json::Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();
        assert_eq!(value["training_type"], "Swimming");
        assert_eq!(value["speed"], 1.0);
        assert_eq!(value["calories"], 336.0);
    }
}
