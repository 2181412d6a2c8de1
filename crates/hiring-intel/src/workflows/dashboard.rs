use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadlineMetric {
    pub label: &'static str,
    pub value: &'static str,
}

/// Executive view of the hiring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutiveSnapshot {
    pub metrics: Vec<HeadlineMetric>,
    pub lifecycle_coverage: Vec<&'static str>,
    pub headline: &'static str,
}

impl ExecutiveSnapshot {
    /// Reference snapshot shown to stakeholders; values are fixed, not computed.
    pub fn standard() -> Self {
        Self {
            metrics: vec![
                HeadlineMetric {
                    label: "Open Positions",
                    value: "12",
                },
                HeadlineMetric {
                    label: "Active Candidates",
                    value: "87",
                },
                HeadlineMetric {
                    label: "Avg Skill Match",
                    value: "82%",
                },
                HeadlineMetric {
                    label: "Drop-Off Risk",
                    value: "18%",
                },
            ],
            lifecycle_coverage: vec![
                "Talent Discovery & Resume Screening",
                "Interview Decision Intelligence",
                "Post-Offer Engagement & Risk Prediction",
                "Conversational Hiring Assistant",
            ],
            headline: "This dashboard demonstrates how GCCs can convert hiring from a manual \
                       workflow into a predictive intelligence system.",
        }
    }

    pub fn metric(&self, label: &str) -> Option<&'static str> {
        self.metrics
            .iter()
            .find(|metric| metric.label == label)
            .map(|metric| metric.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_snapshot_lists_four_metrics_in_order() {
        let snapshot = ExecutiveSnapshot::standard();
        let labels: Vec<_> = snapshot.metrics.iter().map(|m| m.label).collect();
        assert_eq!(
            labels,
            vec![
                "Open Positions",
                "Active Candidates",
                "Avg Skill Match",
                "Drop-Off Risk"
            ]
        );
        assert_eq!(snapshot.metric("Active Candidates"), Some("87"));
        assert_eq!(snapshot.metric("Time To Hire"), None);
    }

    #[test]
    fn coverage_spans_every_hiring_panel() {
        let snapshot = ExecutiveSnapshot::standard();
        assert_eq!(snapshot.lifecycle_coverage.len(), 4);
        assert!(snapshot.headline.contains("predictive intelligence"));
    }
}
