//! 单元测试模块
//! 覆盖路径构建、路径数据解析、矢量资源、惰性图标等功能

pub mod parser_tests;
pub mod vector_tests;
