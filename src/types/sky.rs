use std::fmt;

/// Sky coverage, from the aviation oktas-based reporting scale.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkyCoverage {
    /// Few clouds (1-2 oktas)
    Few,
    /// Scattered (3-4 oktas)
    Scattered,
    /// Broken (5-7 oktas)
    Broken,
    /// Overcast (8 oktas)
    Overcast,
    /// Sky clear, observed by a human
    Skc,
    /// Clear below 12,000ft, automated station
    Clr,
    /// No significant cloud
    Nsc,
    /// Vertical visibility reported instead of a cloud layer (`VVxxx`)
    VerticalVisibility,
}

/// Significant convective cloud type attached to a layer.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CloudType {
    /// Cumulonimbus
    Cb,
    /// Towering cumulus
    Tcu,
}

/// A single reported sky layer, or a vertical-visibility observation.
///
/// `height_feet` is `None` when `coverage` is `Skc`, `Clr`, or `Nsc`.
#[derive(PartialEq, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyCondition {
    /// How much of the sky is covered.
    pub coverage: SkyCoverage,
    /// Layer base, or vertical visibility, in feet.
    pub height_feet: Option<u32>,
    /// Convective cloud type, if reported.
    pub cloud_type: Option<CloudType>,
}

impl fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self.coverage {
            SkyCoverage::Few => "FEW",
            SkyCoverage::Scattered => "SCT",
            SkyCoverage::Broken => "BKN",
            SkyCoverage::Overcast => "OVC",
            SkyCoverage::Skc => "SKC",
            SkyCoverage::Clr => "CLR",
            SkyCoverage::Nsc => "NSC",
            SkyCoverage::VerticalVisibility => "VV",
        };
        f.write_str(code)?;
        if let Some(height) = self.height_feet {
            write!(f, "{:03}", height / 100)?;
        }
        if let Some(cloud_type) = self.cloud_type {
            f.write_str(match cloud_type {
                CloudType::Cb => "CB",
                CloudType::Tcu => "TCU",
            })?;
        }
        Ok(())
    }
}
