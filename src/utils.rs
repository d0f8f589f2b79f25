use std::io::BufRead;

use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
};

use crate::error::{self, Error, Result};

pub fn init_log(level: &str) -> Result<()> {
    let stdout: ConsoleAppender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{h({l})}] - {m}{n}",
        )))
        .build();
    let log_config = log4rs::config::Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level_filter(level)))
        .map_err(|e| Error::new(1001, &format!("{}: {}", error::ERROR_1001, e)))?;
    log4rs::init_config(log_config)
        .map_err(|e| Error::new(1001, &format!("{}: {}", error::ERROR_1001, e)))?;
    Ok(())
}

/// 日志级别字符串转换, 未知级别按 info 处理
pub fn level_filter(level: &str) -> LevelFilter {
    if level == "trace" {
        LevelFilter::Trace
    } else if level == "debug" {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// ## 读取一个以空白分隔的词
/// 跳过前导空白, 读到下一个空白(不消费该空白)或输入结束为止.
///
/// 输入已经没有任何词时返回 `Ok(None)`
pub fn next_token<R: BufRead + ?Sized>(input: &mut R) -> Result<Option<String>> {
    let mut token: Vec<u8> = Vec::new();
    loop {
        let buf = input.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        let mut used = 0usize;
        let mut done = false;
        for &b in buf {
            if b.is_ascii_whitespace() {
                if token.is_empty() {
                    // 前导空白
                    used += 1;
                    continue;
                }
                done = true;
                break;
            }
            token.push(b);
            used += 1;
        }
        input.consume(used);
        if done {
            break;
        }
    }
    if token.is_empty() {
        return Ok(None);
    }
    String::from_utf8(token)
        .map(Some)
        .map_err(|_| Error::new(2004, error::ERROR_2004))
}

/// 十进制文本转换为坐标值, `nan` / `inf` 以及溢出为无穷大的文本均视为非法
pub fn parse_coordinate(token: &str) -> Result<f64> {
    let v = token
        .parse::<f64>()
        .map_err(|e| Error::new(2001, &format!("{} `{}`: {}", error::ERROR_2001, token, e)))?;
    if !v.is_finite() {
        return Err(Error::new(
            2001,
            &format!("{} `{}`: not a finite number", error::ERROR_2001, token),
        ));
    }
    Ok(v)
}
