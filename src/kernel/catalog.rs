//! 赞助目录：固定的金额档位与权益列表（只读）

use std::fmt;

/// 档位金额。`Custom` 是独立的档位模式，不是“缺失的金额”。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Amount {
    Fixed(u32),
    Custom,
}

impl Amount {
    pub fn is_custom(&self) -> bool {
        matches!(self, Amount::Custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SponsorOption {
    pub amount: Amount,
    pub label: String,
    /// 收款码图片的不透明引用，由资源服务解析
    pub image_ref: String,
    /// 卡片标题与弹窗标题共用
    pub display_text: String,
}

impl SponsorOption {
    pub fn new(
        amount: Amount,
        label: impl Into<String>,
        image_ref: impl Into<String>,
        display_text: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            label: label.into(),
            image_ref: image_ref.into(),
            display_text: display_text.into(),
        }
    }

    /// 弹窗标题："¥5 入门支持"
    pub fn dialog_title(&self) -> String {
        format!("{} {}", self.display_text, self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Benefit {
    pub title: String,
    pub description: String,
}

/// 目录中档位的位置。选中状态只保存它，不复制档位本身。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(usize);

impl OptionId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    DuplicateLabel(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "Sponsor catalog is empty"),
            CatalogError::DuplicateLabel(label) => {
                write!(f, "Duplicate sponsor option label: {}", label)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

#[derive(Debug, Clone)]
pub struct Catalog {
    options: Vec<SponsorOption>,
    benefits: Vec<Benefit>,
}

impl Catalog {
    pub fn new(options: Vec<SponsorOption>, benefits: Vec<Benefit>) -> Result<Self, CatalogError> {
        if options.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, option) in options.iter().enumerate() {
            if options[..i].iter().any(|o| o.label == option.label) {
                return Err(CatalogError::DuplicateLabel(option.label.clone()));
            }
        }
        Ok(Self { options, benefits })
    }

    pub fn builtin() -> Self {
        let options = BUILTIN_OPTIONS
            .iter()
            .map(|&(amount, label, image_ref, display_text)| {
                SponsorOption::new(amount, label, image_ref, display_text)
            })
            .collect();
        let benefits = BUILTIN_BENEFITS
            .iter()
            .map(|&(title, description)| Benefit {
                title: title.to_string(),
                description: description.to_string(),
            })
            .collect();
        Self { options, benefits }
    }

    pub fn options(&self) -> &[SponsorOption] {
        &self.options
    }

    pub fn benefits(&self) -> &[Benefit] {
        &self.benefits
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, id: OptionId) -> Option<&SponsorOption> {
        self.options.get(id.0)
    }

    pub fn id_at(&self, index: usize) -> Option<OptionId> {
        (index < self.options.len()).then_some(OptionId(index))
    }

    /// 标签唯一，按值比较即可定位目录成员；目录外的档位返回 `None`。
    pub fn position_of(&self, option: &SponsorOption) -> Option<OptionId> {
        self.options.iter().position(|o| o == option).map(OptionId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (OptionId, &SponsorOption)> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, option)| (OptionId(i), option))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

static BUILTIN_OPTIONS: [(Amount, &str, &str, &str); 5] = [
    (Amount::Fixed(5), "入门支持", "/5.png", "¥5"),
    (Amount::Fixed(10), "进阶支持", "/10.png", "¥10"),
    (Amount::Fixed(20), "标准支持", "/20.png", "¥20"),
    (Amount::Fixed(50), "高级支持", "/50.png", "¥50"),
    (Amount::Custom, "任意金额", "/xx.png", "自定义"),
];

static BUILTIN_BENEFITS: [(&str, &str); 3] = [
    ("优先需求响应", "您的功能需求和问题反馈将获得优先处理"),
    ("Windows一键启动", "获取免安装EXE程序，双击即可使用"),
    ("专属技术支持", "加入赞助者群，获得远程协助和配置指导"),
];

#[cfg(test)]
#[path = "../../tests/unit/kernel/catalog.rs"]
mod tests;
