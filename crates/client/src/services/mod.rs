//! 리소스 그룹별 서비스 구현 — 그룹당 모듈 하나

pub mod databases;
pub mod functions;
pub mod storage;
pub mod users;
