pub const POSITIVE_COLOR: &str = "rgb(14, 203, 129)";
pub const NEGATIVE_COLOR: &str = "red";
pub const NEUTRAL_COLOR: &str = "#ffd700";

/// Threshold (in percent) a predicted change must strictly exceed to count as a strong signal.
pub const STRONG_SIGNAL_THRESHOLD: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    StrongBuy,
    StrongSell,
    Hold,
}

impl Signal {
    pub fn from_change(predicted_change_percent: f64) -> Self {
        if predicted_change_percent > STRONG_SIGNAL_THRESHOLD {
            Signal::StrongBuy
        } else if predicted_change_percent < -STRONG_SIGNAL_THRESHOLD {
            Signal::StrongSell
        } else {
            Signal::Hold
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Signal::StrongBuy => "Strong Buy Signal",
            Signal::StrongSell => "Strong Sell Signal",
            Signal::Hold => "Hold Position",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            Signal::StrongBuy => POSITIVE_COLOR,
            Signal::StrongSell => NEGATIVE_COLOR,
            Signal::Hold => NEUTRAL_COLOR,
        }
    }

    pub fn text_color(&self) -> &'static str {
        match self {
            Signal::StrongBuy | Signal::StrongSell => "white",
            Signal::Hold => "black",
        }
    }

    /// Inline style for the signal badge.
    pub fn style(&self) -> String {
        format!(
            "background-color: {}; color: {};",
            self.background(),
            self.text_color()
        )
    }
}

/// Colour for a signed change figure: green when rising, red otherwise.
pub fn change_color(change: f64) -> &'static str {
    if change > 0.0 {
        POSITIVE_COLOR
    } else {
        NEGATIVE_COLOR
    }
}
