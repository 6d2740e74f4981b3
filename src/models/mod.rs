// Domain models: raw samples in, chart series out.

mod chart;
mod range;
mod sample;

pub use chart::{ChartPoint, ChartSeries, SeriesSummary};
pub use range::TimeRange;
pub use sample::{QueueReading, Sample};
