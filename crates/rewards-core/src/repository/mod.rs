//! 存储后端接口与参考实现
//!
//! 核心引擎只操作内存存储；持久化技术作为外部协作方通过
//! `SnapshotRepository` 接入，提供启动加载与变更持久化两个钩子。

pub mod memory;
pub mod seed;
pub mod traits;

pub use memory::MemoryRepository;
pub use seed::JsonSeedRepository;
pub use traits::{CampusSnapshot, SnapshotRepository};
