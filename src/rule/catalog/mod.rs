//! 描述符目录：浏览器 / 引擎 / 操作系统 / 平台四个有序序列
//! 目录是数据，顺序即优先级；由 `detector::global` 在首次使用时构建一次
pub mod browsers;
pub mod engines;
pub mod os;
pub mod platforms;

pub use self::browsers::GENERIC_LABEL;
