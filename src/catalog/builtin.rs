//! The seed catalog of strategy archetypes.
//!
//! Each entry is a static rule record: keywords looked for in free text,
//! plus the element tags a complete strategy of that shape needs.

use super::pattern::{ElementTag, Pattern, StrategyKind};

fn pattern(
    id: &str,
    name: &str,
    kind: StrategyKind,
    keywords: &[&str],
    required: &[&str],
    optional: &[&str],
    confidence_weight: f64,
    examples: &[&str],
) -> Pattern {
    Pattern {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        required_elements: required.iter().map(|s| ElementTag::parse(s)).collect(),
        optional_elements: optional.iter().map(|s| ElementTag::parse(s)).collect(),
        confidence_weight,
        examples: examples.iter().map(|s| s.to_string()).collect(),
    }
}

/// Builds the default archetype table.
pub(super) fn builtin_patterns() -> Vec<Pattern> {
    vec![
        pattern(
            "rsi_oversold_overbought",
            "RSI Oversold/Overbought",
            StrategyKind::MeanReversion,
            &[
                "rsi",
                "relative strength",
                "oversold",
                "overbought",
                "below 30",
                "above 70",
            ],
            &["indicator:rsi", "condition:threshold", "action:entry"],
            &["timeframe:intraday", "action:exit"],
            0.9,
            &[
                "Buy when RSI is below 30",
                "Sell when RSI goes above 70",
            ],
        ),
        pattern(
            "ma_crossover",
            "Moving Average Crossover",
            StrategyKind::TrendFollowing,
            &[
                "moving average",
                "crossover",
                "golden cross",
                "death cross",
                "sma",
                "ema",
                "crosses above",
            ],
            &["indicator:ma", "condition:crossover", "action:entry"],
            &["indicator:volume", "timeframe:daily"],
            0.9,
            &[
                "Buy when the 50 SMA crosses above the 200 SMA",
                "Golden cross strategy on the daily chart",
            ],
        ),
        pattern(
            "breakout_trading",
            "Breakout Trading",
            StrategyKind::Breakout,
            &[
                "breakout",
                "breaks above",
                "breaks below",
                "resistance",
                "support",
                "new high",
                "range",
            ],
            &["condition:breakout", "action:entry"],
            &["indicator:volume", "condition:volume-confirm"],
            0.85,
            &[
                "Buy on a breakout above resistance",
                "Enter long when price breaks the range high",
            ],
        ),
        pattern(
            "macd_momentum",
            "MACD Momentum",
            StrategyKind::Momentum,
            &[
                "macd",
                "momentum",
                "signal line",
                "histogram",
                "divergence",
            ],
            &["indicator:macd", "condition:crossover", "action:entry"],
            &["condition:divergence"],
            0.85,
            &[
                "Go long when the MACD crosses above the signal line",
                "Trade MACD histogram momentum",
            ],
        ),
        pattern(
            "bollinger_reversion",
            "Bollinger Band Reversion",
            StrategyKind::MeanReversion,
            &[
                "bollinger",
                "bands",
                "squeeze",
                "mean reversion",
                "lower band",
                "upper band",
            ],
            &["indicator:bollinger", "condition:threshold", "action:entry"],
            &["indicator:rsi"],
            0.85,
            &[
                "Buy when price touches the lower Bollinger band",
                "Fade moves outside the bands",
            ],
        ),
        pattern(
            "scalping_quick",
            "Quick Scalping",
            StrategyKind::Scalping,
            &[
                "scalp",
                "scalping",
                "quick",
                "1 minute",
                "tight stop",
                "small profit",
            ],
            &["timeframe:intraday", "action:entry", "action:exit"],
            &["indicator:ema"],
            0.8,
            &[
                "Scalp 1 minute charts with tight stops",
                "Quick in and out trades on small moves",
            ],
        ),
        pattern(
            "swing_trading",
            "Swing Trading",
            StrategyKind::Swing,
            &[
                "swing",
                "daily",
                "weekly",
                "hold for days",
                "pullback",
            ],
            &["timeframe:daily", "condition:trend", "action:entry"],
            &["indicator:ma"],
            0.8,
            &[
                "Swing trade pullbacks in an uptrend",
                "Hold positions for several days",
            ],
        ),
    ]
}
