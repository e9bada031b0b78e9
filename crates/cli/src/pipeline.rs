//! 构建流程：读取配置 → 生成各分区 → 前缀补全 → 压缩 → 写出两个产物

use crate::report::BuildReport;
use breeze_core::{ConfigError, ConfigSource, ThemeConfig};
use breeze_css::{autoprefix, emit_css, merge_stylesheets, minify};
use breeze_theme::{
    generate_components, generate_layout, generate_palette, generate_transitions,
    generate_typography, generate_utilities,
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// 可读产物开头的固定注释
pub const BANNER: &str = concat!(
    "/*! breeze v",
    env!("CARGO_PKG_VERSION"),
    " | generated stylesheet - do not edit */\n"
);

#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 一次构建的两个产物
#[derive(Debug, Clone, PartialEq)]
pub struct Artifacts {
    pub readable: String,
    pub minified: String,
    /// 生成规则中出现的不同类名数量
    pub class_count: usize,
}

/// 纯生成阶段，不做任何 I/O
///
/// 分区顺序固定：调色板 → 排版 → 布局 → 组件 → 工具类 → 过渡。
pub fn compile(config: &ThemeConfig) -> Artifacts {
    let mut sections = vec![
        generate_palette(config),
        generate_typography(config),
        generate_layout(config),
    ];
    sections.extend(generate_components(config));
    sections.extend(generate_utilities(config));
    sections.push(generate_transitions(config));
    debug!(sections = sections.len(), "generated sections");

    let stylesheet = merge_stylesheets(sections);
    let class_count = stylesheet.class_names().len();

    let readable = autoprefix(&format!("{}\n{}", BANNER, emit_css(&stylesheet)));
    let minified = minify(&readable);

    Artifacts {
        readable,
        minified,
        class_count,
    }
}

/// 两个产物的输出路径
#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub readable: PathBuf,
    pub minified: PathBuf,
}

impl OutputPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            readable: dir.join("breeze.css"),
            minified: dir.join("breeze.min.css"),
        }
    }
}

/// 构建编排器，整个流程唯一的错误边界
pub struct Orchestrator<S> {
    source: S,
    outputs: OutputPaths,
}

impl<S: ConfigSource> Orchestrator<S> {
    pub fn new(source: S, outputs: OutputPaths) -> Self {
        Self { source, outputs }
    }

    pub fn outputs(&self) -> &OutputPaths {
        &self.outputs
    }

    pub async fn run(&self) -> Result<BuildReport, BuildError> {
        let config = self.source.load()?;

        for diagnostic in config.validate()? {
            warn!("{}", diagnostic.message);
        }

        let artifacts = compile(&config);
        info!(
            classes = artifacts.class_count,
            bytes = artifacts.readable.len(),
            "stylesheet compiled"
        );

        // 两次写入互不依赖，并发执行；任意一个失败则整个构建失败
        tokio::try_join!(
            write_artifact(&self.outputs.readable, &artifacts.readable),
            write_artifact(&self.outputs.minified, &artifacts.minified)
        )?;

        Ok(BuildReport::from_artifacts(&artifacts))
    }
}

async fn write_artifact(path: &Path, contents: &str) -> Result<(), BuildError> {
    let to_error = |source| BuildError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(to_error)?;
    }

    tokio::fs::write(path, contents).await.map_err(to_error)?;
    debug!(path = %path.display(), bytes = contents.len(), "artifact written");
    Ok(())
}
