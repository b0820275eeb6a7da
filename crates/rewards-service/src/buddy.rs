//! 校园伙伴固定应答器
//!
//! 在固定应答列表中做无状态选择，不做自然语言生成。
//! 选择器可注入：生产环境使用随机选择，测试注入确定性实现
//! 以断言精确输出。

use std::sync::Arc;

use rand::Rng;
use tracing::warn;

/// 应答下标选择器
pub trait ResponsePicker: Send + Sync {
    /// 在 `[0, len)` 中选择一个下标，约定 `len > 0`
    fn pick(&self, len: usize) -> usize;
}

/// 随机选择器
pub struct RandomPicker;

impl ResponsePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// 固定应答器
pub struct BuddyResponder {
    responses: Vec<String>,
    picker: Arc<dyn ResponsePicker>,
}

impl BuddyResponder {
    /// 使用内置应答列表创建
    pub fn new(picker: Arc<dyn ResponsePicker>) -> Self {
        Self {
            responses: default_responses(),
            picker,
        }
    }

    /// 使用自定义应答列表创建，空列表回退到内置列表
    pub fn with_responses(responses: Vec<String>, picker: Arc<dyn ResponsePicker>) -> Self {
        let responses = if responses.is_empty() {
            warn!("自定义应答列表为空，回退到内置列表");
            default_responses()
        } else {
            responses
        };
        Self { responses, picker }
    }

    /// 选择一条应答
    ///
    /// 下标对列表长度取模，选择器越界时也不会 panic。
    pub fn respond(&self) -> String {
        let idx = self.picker.pick(self.responses.len()) % self.responses.len();
        self.responses[idx].clone()
    }
}

/// 内置应答列表
fn default_responses() -> Vec<String> {
    [
        "OMG that's totally valid! 💅✨",
        "Periodt! You're absolutely right about that! 🔥",
        "No cap, that's the tea! ☕",
        "Slay! You're doing amazing sweetie! 💁‍♀️",
        "That's giving... everything! 💯",
        "Literally same bestie! 😭",
        "You ate that up! 👏",
        "That's so fetch! 💖",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
