use getset::{CopyGetters, Getters, MutGetters, Setters};

/// 输出格式
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormatStyle {
    /// `Tom, 54.10324, -6.41667`
    Inline,
    /// 多行带标签:
    /// ```text
    /// Name: Tom
    /// Location - Latitude: 54.10324
    /// Location - Longitude: -6.41667
    /// ```
    Labeled,
}

impl Default for FormatStyle {
    fn default() -> Self {
        FormatStyle::Inline
    }
}

/// Student参数设置
#[derive(Getters, Setters, MutGetters, CopyGetters, Clone, Debug)]
pub struct RecordOption {
    /// 默认构造时使用的占位姓名
    #[getset(get = "pub", set = "pub")]
    default_name: String,
    /// 输出格式
    #[getset(get = "pub", set = "pub")]
    style: FormatStyle,
    /// 日志级别: trace / debug / info
    #[getset(get = "pub", set = "pub")]
    log_level: String,
}

impl Default for RecordOption {
    fn default() -> Self {
        Self {
            default_name: "John Doe".to_string(),
            style: FormatStyle::Inline,
            log_level: "info".to_string(),
        }
    }
}

impl RecordOption {
    pub fn new(default_name: &str) -> Self {
        let mut r = RecordOption::default();
        r.default_name = default_name.to_string();
        r
    }
    ///
    pub fn build(&self) -> Self {
        self.clone()
    }
}
