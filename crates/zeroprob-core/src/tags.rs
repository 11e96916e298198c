use crate::errors::ArgumentError;
use serde::{Deserialize, Serialize};

macro_rules! tag {
    (
        $(#[$meta:meta])* $name:ident, $kind:literal,
        { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stable text form of the tag.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }

            /// Parses a tag from its text form.
            pub fn parse(value: &str) -> Result<Self, ArgumentError> {
                value.parse()
            }
        }

        impl std::str::FromStr for $name {
            type Err = ArgumentError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                match value {
                    $($text => Ok($name::$variant),)+
                    other => Err(ArgumentError::UnknownTag {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tag!(
    /// Which relevance measure applies to a point event.
    MeasureTag, "measure", {
        /// Density value at the point.
        Density => "density",
        /// Hausdorff measure of the point.
        Hausdorff => "hausdorff",
        /// Probability mass of an ε-neighborhood around the point.
        Epsilon => "epsilon",
    }
);

tag!(
    /// Application a composite relevance score is tuned for.
    Application, "application", {
        /// Catastrophic tail risk; damps far-tail points.
        BlackSwan => "black_swan",
        /// Exact-value betting.
        Betting => "betting",
        /// Decision theory with a fixed 5% window.
        DecisionTheory => "decision_theory",
    }
);

tag!(
    /// Approximation used for the expected value of an exact-hit bet.
    Method, "method", {
        /// Near-hit probability from the cumulative distribution.
        Epsilon => "epsilon",
        /// Density times window width; heuristic.
        Density => "density",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_round_trips_through_text() {
        for tag in MeasureTag::ALL {
            assert_eq!(MeasureTag::parse(tag.as_str()).unwrap(), *tag);
        }
        for app in Application::ALL {
            assert_eq!(app.to_string().parse::<Application>().unwrap(), *app);
        }
        for method in Method::ALL {
            assert_eq!(Method::parse(method.as_str()).unwrap(), *method);
        }
    }

    #[test]
    fn unknown_tag_names_its_family() {
        let err = Application::parse("astrology").unwrap_err();
        assert_eq!(
            err,
            ArgumentError::UnknownTag {
                kind: "application",
                value: "astrology".to_string()
            }
        );
    }
}
