use crate::core::PlotArea;
use crate::error::{ChartError, ChartResult};

use super::StripChartConfig;

pub(super) fn validate_plot_area(area: PlotArea) -> ChartResult<PlotArea> {
    if !area.is_valid() {
        return Err(ChartError::InvalidPlotArea {
            width: area.width,
            height: area.height,
        });
    }
    Ok(area)
}

/// Checks what the store and viewport constructors do not: the plot area and
/// style. Capacity, channel count and increments are rejected by
/// `SampleStore::new` and `Viewport::new`.
pub(super) fn validate_config(config: &StripChartConfig) -> ChartResult<()> {
    validate_plot_area(config.plot_area)?;
    config.style.validate()?;
    if config.formatter.decimals > 12 {
        return Err(ChartError::InvalidData(
            "reading formatter decimals must be <= 12".to_owned(),
        ));
    }
    Ok(())
}
