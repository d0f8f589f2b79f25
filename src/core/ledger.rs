use std::cell::Cell;

use getset::CopyGetters;

thread_local! {
    static ALLOCATIONS: Cell<u64> = Cell::new(0);
    static RELEASES: Cell<u64> = Cell::new(0);
}

/// 坐标存储块的分配/释放计数, 按线程统计
#[derive(CopyGetters, Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerSnapshot {
    /// 已分配的存储块数量
    #[getset(get_copy = "pub")]
    allocations: u64,
    /// 已释放的存储块数量
    #[getset(get_copy = "pub")]
    releases: u64,
}

impl LedgerSnapshot {
    /// 当前仍存活的存储块数量
    pub fn live(&self) -> i64 {
        self.allocations as i64 - self.releases as i64
    }
    /// 自 `earlier` 之后发生的分配/释放, 参数顺序颠倒时结果为 0
    pub fn since(&self, earlier: &LedgerSnapshot) -> LedgerSnapshot {
        LedgerSnapshot {
            allocations: self.allocations.saturating_sub(earlier.allocations),
            releases: self.releases.saturating_sub(earlier.releases),
        }
    }
}

pub fn snapshot() -> LedgerSnapshot {
    LedgerSnapshot {
        allocations: ALLOCATIONS.with(|c| c.get()),
        releases: RELEASES.with(|c| c.get()),
    }
}

pub(crate) fn record_allocation() {
    ALLOCATIONS.with(|c| c.set(c.get() + 1));
}

pub(crate) fn record_release() {
    RELEASES.with(|c| c.set(c.get() + 1));
}
