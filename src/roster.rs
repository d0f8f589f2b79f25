use log::{debug, trace};

use crate::error::{self, Error, Result};
use crate::student::Student;

/// ## 学生名册
/// 按槽位编号持有学生记录. 槽位在 `release` 之后保留为空, 编号不会复用,
/// 对已释放槽位的访问返回错误而不是读到别的记录.
#[derive(Debug, Default)]
pub struct Roster {
    slots: Vec<Option<Student>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }
    /// 接收一条记录, 返回其槽位编号
    pub fn admit(&mut self, student: Student) -> usize {
        self.slots.push(Some(student));
        let slot = self.slots.len() - 1;
        debug!("[roster] admit slot {}", slot);
        slot
    }
    pub fn get(&self, slot: usize) -> Result<&Student> {
        match self.slots.get(slot) {
            None => Err(Error::new(3001, error::ERROR_3001)),
            Some(None) => Err(Error::new(3002, error::ERROR_3002)),
            Some(Some(s)) => Ok(s),
        }
    }
    pub fn get_mut(&mut self, slot: usize) -> Result<&mut Student> {
        match self.slots.get_mut(slot) {
            None => Err(Error::new(3001, error::ERROR_3001)),
            Some(None) => Err(Error::new(3002, error::ERROR_3002)),
            Some(Some(s)) => Ok(s),
        }
    }
    /// ## 槽位间赋值 `slots[dst] = slots[src]`
    /// 同一槽位视为自赋值, 直接返回. 返回目标记录, 可继续链式赋值.
    pub fn assign(&mut self, dst: usize, src: usize) -> Result<&mut Student> {
        // 两个槽位都必须存活
        self.get(src)?;
        self.get(dst)?;
        if dst == src {
            trace!("[roster] self-assignment of slot {} skipped", dst);
            return self.get_mut(dst);
        }
        let (dest, source) = if dst < src {
            let (left, right) = self.slots.split_at_mut(src);
            (&mut left[dst], &right[0])
        } else {
            let (left, right) = self.slots.split_at_mut(dst);
            (&mut right[0], &left[src])
        };
        match (dest, source) {
            (Some(d), Some(s)) => Ok(d.assign_from(s)),
            _ => Err(Error::new(3002, error::ERROR_3002)),
        }
    }
    /// 释放槽位中的记录, 其坐标存储块随之释放
    pub fn release(&mut self, slot: usize) -> Result<()> {
        match self.slots.get_mut(slot) {
            None => Err(Error::new(3001, error::ERROR_3001)),
            Some(None) => Err(Error::new(3002, error::ERROR_3002)),
            Some(entry) => {
                debug!("[roster] release slot {}", slot);
                *entry = None;
                Ok(())
            }
        }
    }
    /// 槽位总数(含已释放)
    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
    /// 仍存活的记录数量
    pub fn live(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
    /// 遍历存活记录及其槽位
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Student)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|s| (i, s)))
    }
}
