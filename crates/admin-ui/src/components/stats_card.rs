//! Dashboard summary tiles

use dioxus::prelude::*;

/// Accent colour of a stats tile
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatsColor {
    #[default]
    Cyan,
    Purple,
    Green,
    Orange,
    Red,
}

impl StatsColor {
    fn icon_class(&self) -> &'static str {
        match self {
            StatsColor::Cyan => "bg-cyan-500/10 text-cyan-500",
            StatsColor::Purple => "bg-purple-500/10 text-purple-500",
            StatsColor::Green => "bg-green-500/10 text-green-500",
            StatsColor::Orange => "bg-orange-500/10 text-orange-500",
            StatsColor::Red => "bg-red-500/10 text-red-500",
        }
    }
}

/// Percentage change shown under the value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trend {
    pub percent: i32,
    pub positive: bool,
}

impl Trend {
    pub fn label(&self) -> String {
        let arrow = if self.positive { "↑" } else { "↓" };
        format!("{} {}%", arrow, self.percent.abs())
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct StatsCardProps {
    #[props(into)]
    pub title: String,
    #[props(into)]
    pub value: String,
    #[props(default = None)]
    pub subtitle: Option<String>,
    #[props(default = "📊".to_string(), into)]
    pub icon: String,
    #[props(default)]
    pub color: StatsColor,
    #[props(default = None)]
    pub trend: Option<Trend>,
}

#[component]
pub fn StatsCard(props: StatsCardProps) -> Element {
    let icon_class = format!(
        "w-12 h-12 rounded-xl flex items-center justify-center text-2xl {}",
        props.color.icon_class()
    );

    let trend = props.trend.map(|trend| (trend.label(), trend.positive));

    rsx! {
        div { class: "bg-white overflow-hidden shadow rounded-lg p-5",
            div { class: "flex items-start justify-between",
                div {
                    p { class: "text-sm font-medium text-gray-500", "{props.title}" }
                    p { class: "mt-2 text-3xl font-bold text-gray-900", "{props.value}" }
                    if let Some(subtitle) = &props.subtitle {
                        p { class: "mt-1 text-xs text-gray-400", "{subtitle}" }
                    }
                    if let Some((label, positive)) = trend {
                        p {
                            class: if positive { "mt-2 text-sm font-medium text-green-600" } else { "mt-2 text-sm font-medium text-red-600" },
                            "{label}"
                        }
                    }
                }
                div { class: "{icon_class}", "{props.icon}" }
            }
        }
    }
}
