use anyhow::{anyhow, ensure, Context, Result};
use serde::{Deserialize, Serialize};

use super::run_to_string;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunList {
    pub runs: Vec<Run>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Run {
    pub expr: String,
    pub output: String,
}

impl RunList {
    pub fn empty() -> Self {
        RunList { runs: Vec::new() }
    }

    pub fn open(content: impl AsRef<str>) -> Result<Self> {
        Ok(toml::from_str(content.as_ref())?)
    }

    pub fn save(&mut self) -> Result<String> {
        self.sort();
        Ok(toml::to_string_pretty(self)?)
    }

    fn sort(&mut self) {
        self.runs.sort_by_key(|r| r.expr.to_string())
    }

    /// Record what we currently produce for `expr`, unless it's already listed.
    pub fn add(&mut self, expr: impl AsRef<str>) -> Result<Run> {
        let expr = expr.as_ref();
        if let Some(run) = self.runs.iter().find(|r| r.expr == expr) {
            return Ok(run.clone());
        }
        let run = Run {
            expr: expr.to_string(),
            output: run_to_string(expr)?,
        };
        self.runs.push(run.clone());
        Ok(run)
    }
}

impl Run {
    pub fn check(&self) -> Result<()> {
        let us = run_to_string(&self.expr).with_context(|| anyhow!("running {:?}", self.expr))?;
        ensure!(
            us == self.output,
            "incorrect output for {:?}, we got {us:?}, expected {:?}",
            self.expr,
            self.output
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::RunList;

    #[test]
    fn add_and_save() {
        let mut list = RunList::empty();
        list.add("2 + 2").unwrap();
        list.add("1 +").unwrap();
        list.add("2 + 2").unwrap();
        assert_eq!(2, list.runs.len());

        let saved = list.save().unwrap();
        let reopened = RunList::open(&saved).unwrap();
        assert_eq!("1 +", reopened.runs[0].expr);
        assert_eq!("error: parse", reopened.runs[0].output);
        assert_eq!("4", reopened.runs[1].output);
        for run in &reopened.runs {
            run.check().unwrap();
        }
    }
}
