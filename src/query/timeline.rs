//! Recency tokens: classification, display labels, and CLI name mapping.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Hour,
    Day,
    Week,
    Month,
}

impl TimeUnit {
    pub fn from_code(c: char) -> Option<Self> {
        match c {
            'h' => Some(TimeUnit::Hour),
            'd' => Some(TimeUnit::Day),
            'w' => Some(TimeUnit::Week),
            'm' => Some(TimeUnit::Month),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            TimeUnit::Hour => 'h',
            TimeUnit::Day => 'd',
            TimeUnit::Week => 'w',
            TimeUnit::Month => 'm',
        }
    }

    fn noun(self) -> &'static str {
        match self {
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
        }
    }
}

/// Shape of a raw timeline token. Used for display and diagnostics only;
/// the token itself is always sent as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeline {
    Any,
    Preset(TimeUnit),
    Custom { unit: TimeUnit, count: u32 },
    Unrecognized,
}

impl Timeline {
    pub fn classify(token: &str) -> Self {
        let mut chars = token.chars();
        let Some(first) = chars.next() else {
            return Timeline::Any;
        };
        let Some(unit) = TimeUnit::from_code(first) else {
            return Timeline::Unrecognized;
        };

        let rest = chars.as_str();
        if rest.is_empty() {
            return Timeline::Preset(unit);
        }
        if !rest.bytes().all(|b| b.is_ascii_digit()) {
            return Timeline::Unrecognized;
        }
        match rest.parse::<u32>() {
            Ok(count) if count > 0 => Timeline::Custom { unit, count },
            _ => Timeline::Unrecognized,
        }
    }

    pub fn is_recognized(self) -> bool {
        self != Timeline::Unrecognized
    }

    pub fn label(self) -> String {
        match self {
            Timeline::Any => "Anytime".to_string(),
            Timeline::Preset(TimeUnit::Hour) => "Past Hour".to_string(),
            Timeline::Preset(TimeUnit::Day) => "Past 24 Hours".to_string(),
            Timeline::Preset(TimeUnit::Week) => "Past Week".to_string(),
            Timeline::Preset(TimeUnit::Month) => "Past Month".to_string(),
            Timeline::Custom { unit, count: 1 } => format!("Past 1 {}", unit.noun()),
            Timeline::Custom { unit, count } => format!("Past {count} {}s", unit.noun()),
            Timeline::Unrecognized => "Unrecognized".to_string(),
        }
    }
}

/// Map a user-facing timeline argument to its token.
///
/// Accepts preset names (`hour`, `day`, `week`, `month`, `any`, `anytime`)
/// case-insensitively; anything else is returned unchanged.
pub fn resolve_timeline_arg(arg: &str) -> String {
    let trimmed = arg.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" | "any" | "anytime" => String::new(),
        "hour" => "h".to_string(),
        "day" => "d".to_string(),
        "week" => "w".to_string(),
        "month" => "m".to_string(),
        _ => trimmed.to_string(),
    }
}
