use std::ptr;

use log::trace;

use super::ledger;

/// 经纬度坐标, 存放在独立分配的堆内存块中 `[纬度, 经度]`
///
/// 每个实例独占一个存储块: 克隆时分配新块, 析构时释放一次
#[derive(Debug)]
pub struct Location {
    coords: Box<[f64; 2]>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let coords = Box::new([latitude, longitude]);
        ledger::record_allocation();
        trace!("    [location] allocate block {:p}", &*coords);
        Self { coords }
    }
    /// 纬度
    pub fn latitude(&self) -> f64 {
        self.coords[0]
    }
    /// 经度
    pub fn longitude(&self) -> f64 {
        self.coords[1]
    }
    /// 原地改写两个坐标值, 不重新分配
    pub fn set(&mut self, latitude: f64, longitude: f64) -> &mut Self {
        self.coords[0] = latitude;
        self.coords[1] = longitude;
        self
    }
    /// 把 `other` 的坐标值复制进自己已有的存储块
    pub fn copy_from(&mut self, other: &Location) -> &mut Self {
        self.set(other.latitude(), other.longitude())
    }
    /// 两个实例是否指向同一个存储块
    pub fn shares_storage(&self, other: &Location) -> bool {
        ptr::eq(&*self.coords, &*other.coords)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(0f64, 0f64)
    }
}

impl Clone for Location {
    fn clone(&self) -> Self {
        Self::new(self.latitude(), self.longitude())
    }
    fn clone_from(&mut self, source: &Self) {
        self.copy_from(source);
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.coords == other.coords
    }
}

impl Drop for Location {
    fn drop(&mut self) {
        ledger::record_release();
        trace!("    [location] release block {:p}", &*self.coords);
    }
}
