//! 表单状态管理
//!
//! 添加链接弹窗的输入、当前焦点和提交结果

use crate::errors::DashboardError;
use crate::services::CreateForm;
use crate::utils::url_validator::{validate_short_code, validate_url, validation_error_message};

/// 当前正在编辑的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditingField {
    #[default]
    Url,
    ShortCode,
}

impl EditingField {
    pub fn next(&self) -> Self {
        match self {
            Self::Url => Self::ShortCode,
            Self::ShortCode => Self::Url,
        }
    }

    pub fn display_title(&self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::ShortCode => "Custom Code",
        }
    }
}

/// 表单状态
#[derive(Debug, Default)]
pub struct FormState {
    pub create: CreateForm,
    pub currently_editing: EditingField,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 清空输入和提示，焦点回到 URL
    pub fn reset(&mut self) {
        self.create = CreateForm::new();
        self.currently_editing = EditingField::Url;
    }

    pub fn toggle_field(&mut self) {
        self.currently_editing = self.currently_editing.next();
    }

    pub fn current_input_mut(&mut self) -> &mut String {
        match self.currently_editing {
            EditingField::Url => &mut self.create.url,
            EditingField::ShortCode => &mut self.create.short_code,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.current_input_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.current_input_mut().pop();
    }

    /// Inline hint for a field while typing. Empty fields are not flagged;
    /// the empty-URL case is reported on submit.
    pub fn field_error(&self, field: EditingField) -> Option<&'static str> {
        let result: Result<(), DashboardError> = match field {
            EditingField::Url if self.create.url.is_empty() => Ok(()),
            EditingField::Url => validate_url(&self.create.url),
            EditingField::ShortCode => validate_short_code(&self.create.short_code),
        };
        result.err().map(|e| validation_error_message(&e))
    }
}
