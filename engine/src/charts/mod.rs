mod donut;
pub use donut::{donut_geometry, DonutGeometry};

mod line;
pub use line::{
    line_geometry, AxisTick, Bounds, ChartGeometry, ChartPoint, ChartSpec, Margin, PathPoint,
    PeriodLabel, TICK_INTERVALS,
};

mod sparkline;
pub use sparkline::{sparkline_geometry, SparkPoint, SparklineGeometry, SPARK_HEIGHT, SPARK_WIDTH};
