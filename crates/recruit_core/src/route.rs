use crate::model::JobId;

/// Dashboard tab selected by the `tab` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Upload,
    Jobs,
    Candidates,
}

impl Tab {
    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Upload => "upload",
            Tab::Jobs => "jobs",
            Tab::Candidates => "candidates",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dashboard" => Some(Tab::Dashboard),
            "upload" => Some(Tab::Upload),
            "jobs" => Some(Tab::Jobs),
            "candidates" => Some(Tab::Candidates),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Route {
    pub tab: Tab,
    pub job_id: Option<JobId>,
}

impl Route {
    pub fn tab(tab: Tab) -> Self {
        Self { tab, job_id: None }
    }

    /// Parses `tab=jobs&jobId=3` style queries. A leading `?` is accepted;
    /// unknown tabs fall back to the dashboard and bad job ids are ignored.
    pub fn parse(query: &str) -> Self {
        let mut route = Route::default();
        let query = query.trim().trim_start_matches('?');
        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "tab" => route.tab = Tab::parse(value).unwrap_or_default(),
                "jobId" => route.job_id = value.trim().parse().ok(),
                _ => {}
            }
        }
        route
    }

    pub fn to_query(&self) -> String {
        match self.job_id {
            Some(job_id) => format!("tab={}&jobId={job_id}", self.tab.as_str()),
            None => format!("tab={}", self.tab.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tab_and_job_id() {
        let route = Route::parse("?tab=candidates&jobId=42");
        assert_eq!(route.tab, Tab::Candidates);
        assert_eq!(route.job_id, Some(42));
        assert_eq!(route.to_query(), "tab=candidates&jobId=42");
    }

    #[test]
    fn unknown_values_fall_back() {
        let route = Route::parse("tab=settings&jobId=abc&extra");
        assert_eq!(route, Route::default());
        assert_eq!(Route::parse("").to_query(), "tab=dashboard");
    }
}
