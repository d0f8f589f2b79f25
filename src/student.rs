use std::{
    fmt,
    io::{BufRead, Write},
    ptr,
    str::FromStr,
};

use getset::{Getters, Setters};
use log::trace;

use crate::core::{FormatStyle, Location, RecordOption};
use crate::error::{self, Error, Result};
use crate::utils::{next_token, parse_coordinate};

/// ## 学生记录
/// 持有姓名和一个独立分配的坐标存储块 [`Location`].
///
/// * 复制(`clone`)为目标分配新的存储块, 再复制姓名与坐标值
/// * 赋值(`assign_from` / `clone_from`)复用目标已有的存储块
/// * 析构时存储块恰好释放一次
///
///### 示例:
///```
/// use student_record::Student;
///
/// let mut tom = Student::new("Tom", 54.10324, -6.41667);
/// assert_eq!(tom.to_string(), "Tom, 54.10324, -6.41667");
/// tom.set_location(77.77777, 88.88888);
/// assert_eq!(tom.to_string(), "Tom, 77.77777, 88.88888");
///```
#[derive(Getters, Setters, Debug, PartialEq)]
pub struct Student {
    /// 姓名
    #[getset(get = "pub", set = "pub")]
    name: String,
    /// 坐标 `[纬度, 经度]`
    #[getset(get = "pub")]
    location: Location,
}

impl Default for Student {
    fn default() -> Self {
        Self::from_option(&RecordOption::default())
    }
}

impl Student {
    pub fn new(name: &str, latitude: f64, longitude: f64) -> Self {
        trace!("[student] construct {}", name);
        Self {
            name: name.to_string(),
            location: Location::new(latitude, longitude),
        }
    }
    /// 默认构造: 占位姓名取自参数设置, 坐标为 (0.0, 0.0)
    pub fn from_option(option: &RecordOption) -> Self {
        trace!("[student] default construct {}", option.default_name());
        Self {
            name: option.default_name().to_string(),
            location: Location::default(),
        }
    }
    pub fn latitude(&self) -> f64 {
        self.location.latitude()
    }
    pub fn longitude(&self) -> f64 {
        self.location.longitude()
    }
    /// 原地改写坐标
    pub fn set_location(&mut self, latitude: f64, longitude: f64) -> &mut Self {
        self.location.set(latitude, longitude);
        self
    }
    /// ## 赋值
    /// 把 `other` 的姓名和坐标复制到自己身上, 坐标写入已有存储块.
    /// 返回自身, 因此可以链式赋值.
    /// 安全代码中无法对同一记录自赋值, 按槽位的自赋值见 [`crate::Roster::assign`]:
    ///```
    /// use student_record::Student;
    ///
    /// let mut a = Student::new("A", 1.0, 1.0);
    /// let mut b = Student::new("B", 2.0, 2.0);
    /// let c = Student::new("C", 3.0, 3.0);
    /// // a = b = c
    /// a.assign_from(b.assign_from(&c));
    /// assert_eq!(a, c);
    /// assert_eq!(b, c);
    ///```
    pub fn assign_from(&mut self, other: &Student) -> &mut Self {
        // 按地址判断自赋值, 而不是按值
        if ptr::eq(&*self, other) {
            trace!("[student] self-assignment of {} skipped", self.name);
            return self;
        }
        trace!("[student] assign {} <- {}", self.name, other.name);
        self.name.clone_from(&other.name);
        self.location.copy_from(&other.location);
        self
    }
    /// 两条记录是否共用同一个坐标存储块
    pub fn shares_storage(&self, other: &Student) -> bool {
        self.location.shares_storage(&other.location)
    }
    /// 按指定格式写出: 姓名, 纬度, 经度
    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W, style: FormatStyle) -> Result<()> {
        match style {
            FormatStyle::Inline => writeln!(out, "{}", self)?,
            FormatStyle::Labeled => write!(out, "{}", self.labeled())?,
        }
        Ok(())
    }
    /// 按参数设置中的格式写出
    pub fn write_with<W: Write + ?Sized>(&self, out: &mut W, option: &RecordOption) -> Result<()> {
        self.write_to(out, *option.style())
    }
    /// 多行带标签格式
    pub fn labeled(&self) -> Labeled<'_> {
        Labeled(self)
    }
    /// ## 读取
    /// 依次读取姓名, 纬度, 经度三个词并覆盖当前记录.
    ///
    /// 三个词全部解析成功后才会写入, 失败时记录保持原值
    pub fn read_from<R: BufRead + ?Sized>(&mut self, input: &mut R) -> Result<&mut Self> {
        let name = expect_token(input)?;
        let latitude = parse_coordinate(&expect_token(input)?)?;
        let longitude = parse_coordinate(&expect_token(input)?)?;
        trace!("[student] read {} <- {}", self.name, name);
        self.name = name;
        self.location.set(latitude, longitude);
        Ok(self)
    }
}

fn expect_token<R: BufRead + ?Sized>(input: &mut R) -> Result<String> {
    next_token(input)?.ok_or_else(|| Error::new(2002, error::ERROR_2002))
}

impl Clone for Student {
    fn clone(&self) -> Self {
        trace!("[student] copy construct {}", self.name);
        Self {
            name: self.name.clone(),
            location: self.location.clone(),
        }
    }
    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl Drop for Student {
    fn drop(&mut self) {
        trace!("[student] destroy {}", self.name);
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.latitude(), self.longitude())
    }
}

impl FromStr for Student {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut ret = Student::default();
        ret.read_from(&mut s.as_bytes())?;
        Ok(ret)
    }
}

/// [`Student`] 的多行带标签显示
pub struct Labeled<'a>(&'a Student);

impl fmt::Display for Labeled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Name: {}", self.0.name)?;
        writeln!(f, "Location - Latitude: {}", self.0.latitude())?;
        writeln!(f, "Location - Longitude: {}", self.0.longitude())
    }
}

#[cfg(test)]
mod tests {
    use super::Student;
    use crate::core::{ledger, FormatStyle, RecordOption};
    use std::io::{Cursor, Read};

    #[test]
    fn test_construct_and_format() {
        let tom = Student::new("Tom", 54.10324, -6.41667);
        assert_eq!(tom.to_string(), "Tom, 54.10324, -6.41667");
    }

    #[test]
    fn test_set_location_in_place() {
        let mut tom = Student::new("Tom", 54.10324, -6.41667);
        let before = ledger::snapshot();
        tom.set_location(77.77777, 88.88888);
        assert_eq!(ledger::snapshot().since(&before).allocations(), 0);
        assert_eq!(tom.to_string(), "Tom, 77.77777, 88.88888");
    }

    #[test]
    fn test_default_construct() {
        let s = Student::default();
        assert_eq!(s.name(), "John Doe");
        assert_eq!(s.latitude(), 0f64);
        assert_eq!(s.longitude(), 0f64);

        let option = RecordOption::new("Jane Roe");
        assert_eq!(Student::from_option(&option).name(), "Jane Roe");
    }

    #[test]
    fn test_clone_does_not_alias() {
        let mut s1 = Student::new("Tom", 54.10324, -6.41667);
        let mut s2 = s1.clone();
        assert_eq!(s1, s2);
        assert!(!s1.shares_storage(&s2));

        s2.set_location(1.0, 2.0);
        assert_eq!(s1.to_string(), "Tom, 54.10324, -6.41667");
        s1.set_location(3.0, 4.0);
        assert_eq!(s2.to_string(), "Tom, 1, 2");
    }

    #[test]
    fn test_assign_from_copies_values_into_own_block() {
        let source = Student::new("Tom", 77.77777, 88.88888);
        let mut dest = Student::default();
        let before = ledger::snapshot();
        dest.assign_from(&source);
        assert_eq!(ledger::snapshot().since(&before), ledger::LedgerSnapshot::default());
        assert_eq!(dest, source);
        assert!(!dest.shares_storage(&source));

        dest.set_location(0.5, 0.5);
        assert_eq!(source.latitude(), 77.77777);
    }

    #[test]
    fn test_chained_assignment() {
        let mut a = Student::new("A", 1.0, 1.5);
        let mut b = Student::new("B", 2.0, 2.5);
        let c = Student::new("C", 3.0, 3.5);
        a.assign_from(b.assign_from(&c));
        for s in [&a, &b].iter() {
            assert_eq!(s.to_string(), "C, 3, 3.5");
            assert!(!s.shares_storage(&c));
        }
        assert!(!a.shares_storage(&b));
        assert_eq!(c.to_string(), "C, 3, 3.5");
    }

    #[test]
    fn test_clone_from_uses_assignment() {
        let source = Student::new("Tom", 5.0, 6.0);
        let mut dest = Student::new("Ann", 0.0, 0.0);
        let before = ledger::snapshot();
        dest.clone_from(&source);
        assert_eq!(ledger::snapshot().since(&before).allocations(), 0);
        assert_eq!(dest, source);
    }

    #[test]
    fn test_construct_and_destroy_exactly_once() {
        const N: u64 = 16;
        let before = ledger::snapshot();
        {
            let students: Vec<Student> = (0..N)
                .map(|i| Student::new("S", i as f64, -(i as f64)))
                .collect();
            assert_eq!(ledger::snapshot().since(&before).live(), N as i64);
            drop(students);
        }
        let delta = ledger::snapshot().since(&before);
        assert_eq!(delta.allocations(), N);
        assert_eq!(delta.releases(), N);
    }

    #[test]
    fn test_moves_do_not_allocate_or_release() {
        let before = ledger::snapshot();
        let s = Student::new("Tom", 1.0, 2.0);
        let moved = s;
        let boxed = Box::new(moved);
        assert_eq!(ledger::snapshot().since(&before).allocations(), 1);
        drop(boxed);
        let delta = ledger::snapshot().since(&before);
        assert_eq!(delta.releases(), 1);
        assert_eq!(delta.live(), 0);
    }

    #[test]
    fn test_write_styles() {
        let tom = Student::new("Tom", 54.10324, -6.41667);
        let mut out: Vec<u8> = Vec::new();
        tom.write_to(&mut out, FormatStyle::Inline).unwrap();
        tom.write_to(&mut out, FormatStyle::Labeled).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Tom, 54.10324, -6.41667\n\
             Name: Tom\n\
             Location - Latitude: 54.10324\n\
             Location - Longitude: -6.41667\n"
        );

        let option = RecordOption::default()
            .set_style(FormatStyle::Labeled)
            .build();
        let mut out: Vec<u8> = Vec::new();
        tom.write_with(&mut out, &option).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("Name: Tom\n"));
    }

    #[test]
    fn test_read_from() {
        let mut input = Cursor::new("Tom\n54.10324 -6.41667 next");
        let mut s = Student::default();
        s.read_from(&mut input).unwrap();
        assert_eq!(s.to_string(), "Tom, 54.10324, -6.41667");
        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, " next");
    }

    #[test]
    fn test_read_from_rejects_bad_number() {
        let mut s = Student::new("Ann", 1.0, 2.0);
        let err = s
            .read_from(&mut "Tom notanumber -6.4".as_bytes())
            .unwrap_err();
        assert_eq!(err.code, 2001);
        assert!(err.message.contains("notanumber"));
        assert_eq!(s.to_string(), "Ann, 1, 2");
    }

    #[test]
    fn test_read_from_rejects_non_finite() {
        let mut s = Student::new("Ann", 1.0, 2.0);
        for input in ["Tom nan 1.0", "Tom 1.0 inf", "Tom 1e400 1.0"].iter() {
            let err = s.read_from(&mut input.as_bytes()).unwrap_err();
            assert_eq!(err.code, 2001);
            assert_eq!(s.to_string(), "Ann, 1, 2");
        }
        assert_eq!(s, s.clone());
    }

    #[test]
    fn test_read_from_truncated_input() {
        let mut s = Student::default();
        let err = s.read_from(&mut "Tom 54.1".as_bytes()).unwrap_err();
        assert_eq!(err.code, 2002);
    }

    #[test]
    fn test_from_str() {
        let s: Student = "Dave 54.10324 -6.41667".parse().unwrap();
        assert_eq!(s.name(), "Dave");
        assert_eq!(s.longitude(), -6.41667);
        assert_eq!("Tom x 1".parse::<Student>().unwrap_err().code, 2001);
    }
}
