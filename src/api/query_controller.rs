use crate::query::{AllChannels, ChannelSelector, PointQueryResolver, PointReading};

use super::StripChartEngine;

impl StripChartEngine {
    /// Formatted reading under the pointer, or an empty string when there is
    /// no data there.
    #[must_use]
    pub fn query_at(&self, pixel_x: f64, pixel_y: f64) -> String {
        self.reading_at(pixel_x, pixel_y, &AllChannels)
            .map(|reading| self.formatter.format(&reading))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn reading_at<S: ChannelSelector + ?Sized>(
        &self,
        pixel_x: f64,
        pixel_y: f64,
        selector: &S,
    ) -> Option<PointReading> {
        PointQueryResolver.resolve(
            pixel_x,
            pixel_y,
            &self.viewport,
            self.plot_area,
            &self.store,
            selector,
        )
    }
}
