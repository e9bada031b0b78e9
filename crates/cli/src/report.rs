use crate::pipeline::Artifacts;
use std::fmt;

/// 构建报告
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub distinct_class_selectors: usize,
    pub readable_bytes: usize,
    pub minified_bytes: usize,
    /// 可读产物 blake3 hash 的前 12 位，相同配置应得到相同的值
    pub fingerprint: String,
}

impl BuildReport {
    pub fn from_artifacts(artifacts: &Artifacts) -> Self {
        let hash = blake3::hash(artifacts.readable.as_bytes());
        let hex = format!("{}", hash);

        Self {
            distinct_class_selectors: artifacts.class_count,
            readable_bytes: artifacts.readable.len(),
            minified_bytes: artifacts.minified.len(),
            fingerprint: hex[..12].to_string(),
        }
    }

    /// 压缩后体积占原体积的百分比
    pub fn minified_ratio(&self) -> f64 {
        if self.readable_bytes == 0 {
            return 0.0;
        }
        self.minified_bytes as f64 / self.readable_bytes as f64 * 100.0
    }
}

impl fmt::Display for BuildReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  {:<18} {:>14}", "Metric", "Value")?;
        writeln!(f, "  {:<18} {:>14}", "-".repeat(18), "-".repeat(14))?;
        writeln!(f, "  {:<18} {:>14}", "Class selectors", self.distinct_class_selectors)?;
        writeln!(f, "  {:<18} {:>14}", "Readable size", format!("{} B", self.readable_bytes))?;
        writeln!(
            f,
            "  {:<18} {:>14}",
            "Minified size",
            format!("{} B ({:.1}%)", self.minified_bytes, self.minified_ratio())
        )?;
        writeln!(f, "  {:<18} {:>14}", "Fingerprint", self.fingerprint)
    }
}
