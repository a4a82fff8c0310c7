mod metric_domain;

pub use metric_domain::MetricDomain;
