//! Chart rendering options shared by every dashboard page

use serde::Serialize;

/// Options handed to the charting library when a page draws a plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartConfig {
    /// Chart resizes with its container
    pub responsive: bool,
    /// Show the interactive toolbar
    #[serde(rename = "displayModeBar")]
    pub display_mode_bar: bool,
    /// Show the provider logo
    #[serde(rename = "displaylogo")]
    pub display_logo: bool,
}

pub const CHART_CONFIG: ChartConfig = ChartConfig {
    responsive: true,
    display_mode_bar: true,
    display_logo: false,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_config_values() {
        assert!(CHART_CONFIG.responsive);
        assert!(CHART_CONFIG.display_mode_bar);
        assert!(!CHART_CONFIG.display_logo);
    }

    #[test]
    fn test_chart_config_uses_library_keys() {
        let json = serde_json::to_value(CHART_CONFIG).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "responsive": true,
                "displayModeBar": true,
                "displaylogo": false
            })
        );
    }
}
