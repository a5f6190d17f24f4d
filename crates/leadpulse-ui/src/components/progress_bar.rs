//! Horizontal progress bar.

use dioxus::prelude::*;

/// Color treatment of the filled part
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ProgressTone {
    #[default]
    Active,
    Success,
    Danger,
}

impl ProgressTone {
    pub fn class(&self) -> &'static str {
        match self {
            ProgressTone::Active => "progress-fill active",
            ProgressTone::Success => "progress-fill success",
            ProgressTone::Danger => "progress-fill danger",
        }
    }
}

/// Inline style for a fill of `percent` (clamped to 100)
pub fn fill_style(percent: u32) -> String {
    format!("width: {}%;", percent.min(100))
}

#[component]
pub fn ProgressBar(
    /// Whole percent, clamped to 100
    percent: u32,
    #[props(default)] tone: ProgressTone,
    /// Render the percentage next to the bar
    #[props(default = true)]
    show_label: bool,
) -> Element {
    let style = fill_style(percent);
    let percent = percent.min(100);

    rsx! {
        div { class: "progress",
            div {
                class: "progress-track",
                role: "progressbar",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                "aria-valuenow": "{percent}",
                div { class: tone.class(), style: "{style}" }
            }
            if show_label {
                span { class: "progress-label", "{percent}%" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_style_clamps() {
        assert_eq!(fill_style(45), "width: 45%;");
        assert_eq!(fill_style(180), "width: 100%;");
    }

    #[test]
    fn tone_classes() {
        assert_eq!(ProgressTone::default().class(), "progress-fill active");
        assert_eq!(ProgressTone::Danger.class(), "progress-fill danger");
    }
}
