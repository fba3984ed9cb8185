//! Built-in rewrite tables: phrase rules, punctuation and known extensions.
//!
//! Phrase rules are an ordered list, not a map. Each rule rewrites the output
//! of the rules before it, so a phrase must be listed before any shorter
//! phrase it contains.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One literal `pattern -> replacement` rewrite.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PhraseRule {
    pub pattern: String,
    pub replacement: String,
}

impl PhraseRule {
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            replacement: replacement.to_string(),
        }
    }
}

const PHRASE_RULES: &[(&str, &str)] = &[
    ("开箱上手指南", "Getting Started"),
    ("快速启动优化指南", "Quick Start Optimization Guide"),
    ("环境搭建指引", "Environment Setup Guide"),
    ("外围设备驱动", "Peripheral Drivers"),
    ("整体函数列表", "Overall Function List"),
    ("死机问题定位", "Crash Debugging"),
    ("失效引脚汇总", "Failed Pins Summary"),
    ("调优参考文档", "Optimization Reference"),
    ("配套芯片资料", "Supporting Chip Documentation"),
    ("硬件参考设计", "Hardware Reference Design"),
    ("低功耗模式", "Low Power Mode"),
    ("参考原理图", "Reference Schematics"),
    ("可靠性报告", "Reliability Report"),
    ("添加与调试", "Adding and Debugging"),
    ("软件开发包", "Software Development Kit"),
    ("快速启动", "Quick Start"),
    ("优化指南", "Optimization Guide"),
    ("环境搭建", "Environment Setup"),
    ("网络功能", "network function"),
    ("基础文档", "Basic Documentation"),
    ("测试报告", "Test Reports"),
    ("软件相关", "Software"),
    ("硬件相关", "Hardware"),
    ("参考设计", "Reference Design"),
    ("详细设计", "Detailed Design"),
    ("防护设计", "Protection Design"),
    ("典型场景", "Typical Scenarios"),
    ("畸变矫正", "Distortion Correction"),
    ("参考PCB", "Reference PCB"),
    ("使用指南", "User Guide"),
    ("用户指南", "User Guide"),
    ("开发参考", "Development Reference"),
    ("开发指南", "Development Guide"),
    ("开发环境", "Development Environment"),
    ("适配指南", "Adaptation Guide"),
    ("整体说明", "Overview"),
    ("说明文档", "Documentation"),
    ("接口协议", "Interface Specification"),
    ("注意事项", "Notes"),
    ("调用规则", "Invocation Rules"),
    ("参数设置", "Parameter Settings"),
    ("性能统计", "Performance Statistics"),
    ("模型编译", "Model Compilation"),
    ("拉流工具", "Streaming Tools"),
    ("上传工具", "Upload Tool"),
    ("图像质量", "Image Quality"),
    ("图像调优", "Image Tuning"),
    ("离线仿真", "Offline Simulation"),
    ("文件系统", "File System"),
    ("芯片简介", "Chip Introduction"),
    ("数据手册", "Datasheet"),
    ("场景样例", "Scene Samples"),
    ("说明书", "Manual"),
    ("兼容性", "Compatibility"),
    ("可靠性", "Reliability"),
    ("工具链", "Toolchain"),
    ("配置类", "Configurations"),
    ("原理图", "Schematics"),
    ("编译", "Compilation"),
    ("环境", "Environment"),
    ("搭建", "Setup"),
    ("指引", "Guide"),
    ("功能", "function"),
    ("设计", "Design"),
    ("工具", "Tools"),
    ("模型", "Model"),
    ("芯片", "Chip"),
    ("子板", "Sub-board"),
    ("图像", "Image"),
    ("功耗", "Power Consumption"),
    ("外设", "Peripherals"),
    ("硬件", "Hardware"),
    ("音频", "Audio"),
    ("视频", "Video"),
    ("颜色", "Color"),
    ("防抖", "Stabilization"),
    ("标定", "Calibration"),
    ("矫正", "Correction"),
    ("参考", "Reference"),
    ("说明", "Guide"),
    ("调试", "Debugging"),
    ("参数", "Parameters"),
    ("效果", "Quality"),
    ("介绍", "Introduction"),
    ("升级", "Upgrade"),
    ("烧录", "Burning"),
    ("镜像", "Image"),
    ("打包", "Packaging"),
    ("驱动", "Driver"),
    ("使用", "Usage"),
    ("配置", "Configuration"),
    ("量产", "Mass Production"),
    ("质量", "Quality"),
    ("测试", "Test"),
    ("报告", "Report"),
    ("引脚", "Pin"),
    ("定义", "Definition"),
    ("系列", "Series"),
    ("流程", "Process"),
    ("网络", "Network"),
    ("使能", "Enable"),
    ("指南", "Guide"),
    ("的", " "),
];

const PUNCTUATION: &[(char, &str)] = &[
    ('（', "("),
    ('）', ")"),
    ('：', "-"),
    ('；', ","),
    ('、', ","),
    ('，', ","),
    ('。', "."),
    ('！', "!"),
    ('？', "?"),
    ('【', "["),
    ('】', "]"),
    ('《', " "),
    ('》', " "),
    ('“', "\""),
    ('”', "\""),
    ('‘', "'"),
    ('’', "'"),
    ('—', "-"),
    ('–', "-"),
    ('·', "-"),
    ('\u{00A0}', " "),
    ('\u{3000}', " "),
];

const KNOWN_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "ppt", "pptx", "xls", "xlsx", "xlsm", "txt", "md", "csv", "json",
    "yaml", "yml", "zip", "rar", "7z", "gz", "bz2", "xz", "tar", "tgz", "tbz2", "deb", "rpm",
    "bin", "exe", "dll", "so", "a", "o", "png", "jpg", "jpeg", "gif", "bmp", "tiff", "svg",
    "dsn", "brd",
];

/// Ordered phrase rules applied as global literal replacements.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<PhraseRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<PhraseRule>) -> Self {
        Self { rules }
    }

    /// The built-in table for the SA62 documentation tree.
    pub fn builtin() -> Self {
        Self::new(
            PHRASE_RULES
                .iter()
                .map(|(pattern, replacement)| PhraseRule::new(pattern, replacement))
                .collect(),
        )
    }

    /// Insert `rules` ahead of the current ones, keeping their relative order.
    pub fn prepend(&mut self, rules: &[PhraseRule]) {
        let mut merged = rules.to_vec();
        merged.append(&mut self.rules);
        self.rules = merged;
    }

    pub fn rules(&self) -> &[PhraseRule] {
        &self.rules
    }

    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for rule in &self.rules {
            if out.contains(rule.pattern.as_str()) {
                out = out.replace(rule.pattern.as_str(), &rule.replacement);
            }
        }
        out
    }
}

/// Replace full-width and typographic punctuation with ASCII.
pub fn apply_punctuation(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match PUNCTUATION.iter().find(|(from, _)| *from == ch) {
            Some((_, to)) => out.push_str(to),
            None => out.push(ch),
        }
    }
    out
}

/// Case-insensitive set of suffixes treated as real file extensions.
#[derive(Debug, Clone)]
pub struct KnownExtensions {
    exts: BTreeSet<String>,
}

impl KnownExtensions {
    pub fn builtin() -> Self {
        Self {
            exts: KNOWN_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }

    pub fn extend<I, S>(&mut self, exts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for ext in exts {
            let ext = ext.as_ref().trim_start_matches('.').to_ascii_lowercase();
            if !ext.is_empty() {
                self.exts.insert(ext);
            }
        }
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.exts.contains(&ext.to_lowercase())
    }

    /// Split `name` into stem and extension (with its dot).
    ///
    /// Only a known suffix after the last dot counts as an extension; a
    /// leading dot never does. Otherwise the extension is empty and the whole
    /// name is the stem.
    pub fn split<'a>(&self, name: &'a str) -> (&'a str, &'a str) {
        let Some(dot) = name.rfind('.') else {
            return (name, "");
        };
        if name[..dot].chars().all(|ch| ch == '.') {
            return (name, "");
        }
        let (stem, ext) = name.split_at(dot);
        if self.contains(&ext[1..]) {
            (stem, ext)
        } else {
            (name, "")
        }
    }
}
