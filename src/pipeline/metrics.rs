//! Accuracy and per-class classification metrics

use std::collections::BTreeSet;
use std::fmt;

/// Fraction of predictions matching the true labels.
pub fn accuracy(y_true: &[i64], y_pred: &[i64]) -> f64 {
    assert_eq!(y_true.len(), y_pred.len(), "label/prediction length mismatch");
    if y_true.is_empty() {
        return 0.0;
    }

    let correct = y_true
        .iter()
        .zip(y_pred.iter())
        .filter(|(t, p)| t == p)
        .count();
    correct as f64 / y_true.len() as f64
}

/// Precision, recall, F1, and support for one label class.
#[derive(Debug, Clone)]
pub struct ClassMetrics {
    pub label: i64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub support: usize,
}

/// Per-class breakdown plus aggregate accuracy.
///
/// The `Display` impl renders the fixed text layout written into the
/// evaluation report: one row per class, then accuracy, macro average, and
/// support-weighted average.
#[derive(Debug, Clone)]
pub struct ClassificationReport {
    pub classes: Vec<ClassMetrics>,
    pub accuracy: f64,
    pub support: usize,
}

impl ClassificationReport {
    pub fn compute(y_true: &[i64], y_pred: &[i64]) -> Self {
        assert_eq!(y_true.len(), y_pred.len(), "label/prediction length mismatch");

        let labels: BTreeSet<i64> = y_true.iter().chain(y_pred.iter()).copied().collect();

        let mut classes = Vec::with_capacity(labels.len());
        for label in labels {
            let mut tp = 0usize;
            let mut fp = 0usize;
            let mut fn_ = 0usize;
            let mut support = 0usize;

            for (&t, &p) in y_true.iter().zip(y_pred.iter()) {
                if t == label {
                    support += 1;
                }
                match (p == label, t == label) {
                    (true, true) => tp += 1,
                    (true, false) => fp += 1,
                    (false, true) => fn_ += 1,
                    (false, false) => {}
                }
            }

            let precision = ratio(tp, tp + fp);
            let recall = ratio(tp, tp + fn_);
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            classes.push(ClassMetrics {
                label,
                precision,
                recall,
                f1,
                support,
            });
        }

        Self {
            classes,
            accuracy: accuracy(y_true, y_pred),
            support: y_true.len(),
        }
    }

    /// Unweighted mean of (precision, recall, f1) across classes.
    pub fn macro_avg(&self) -> (f64, f64, f64) {
        if self.classes.is_empty() {
            return (0.0, 0.0, 0.0);
        }
        let n = self.classes.len() as f64;
        let (p, r, f) = self.classes.iter().fold((0.0, 0.0, 0.0), |acc, c| {
            (acc.0 + c.precision, acc.1 + c.recall, acc.2 + c.f1)
        });
        (p / n, r / n, f / n)
    }

    /// Support-weighted mean of (precision, recall, f1) across classes.
    pub fn weighted_avg(&self) -> (f64, f64, f64) {
        if self.support == 0 {
            return (0.0, 0.0, 0.0);
        }
        let total = self.support as f64;
        let (p, r, f) = self.classes.iter().fold((0.0, 0.0, 0.0), |acc, c| {
            let w = c.support as f64;
            (
                acc.0 + c.precision * w,
                acc.1 + c.recall * w,
                acc.2 + c.f1 * w,
            )
        });
        (p / total, r / total, f / total)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl fmt::Display for ClassificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10} {:>10}",
            "", "precision", "recall", "f1-score", "support"
        )?;
        writeln!(f)?;

        for class in &self.classes {
            writeln!(
                f,
                "{:>12} {:>10.4} {:>10.4} {:>10.4} {:>10}",
                class.label, class.precision, class.recall, class.f1, class.support
            )?;
        }

        writeln!(f)?;
        writeln!(
            f,
            "{:>12} {:>10} {:>10} {:>10.4} {:>10}",
            "accuracy", "", "", self.accuracy, self.support
        )?;

        let (mp, mr, mf) = self.macro_avg();
        writeln!(
            f,
            "{:>12} {:>10.4} {:>10.4} {:>10.4} {:>10}",
            "macro avg", mp, mr, mf, self.support
        )?;

        let (wp, wr, wf) = self.weighted_avg();
        writeln!(
            f,
            "{:>12} {:>10.4} {:>10.4} {:>10.4} {:>10}",
            "weighted avg", wp, wr, wf, self.support
        )?;

        Ok(())
    }
}
