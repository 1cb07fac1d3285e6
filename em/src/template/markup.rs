//! Template markup: the blank item template and its section markers

/// Blank LaTeX document handed to the editor when creating an item
///
/// The document compiles on its own; the `% @@BEGIN_*` / `% @@END_*` comment
/// lines delimit the regions read back by the parser.
pub const ITEM_TEMPLATE: &str = r"\documentclass[12pt]{article}
\usepackage[a4paper, margin=2cm]{geometry}
\usepackage[utf8]{inputenc}
\usepackage{amsmath, amssymb}
\usepackage{parskip}

% Renders one grading criterion. Usage: \criterion{description}{points}
\newcommand{\criterion}[2]{\noindent\textbullet~#1\hfill\textit{(#2~pts)}\par\smallskip}

% Renders one course assignment. Usage: \course{code}{difficulty}{topic}
\newcommand{\course}[3]{\noindent\textbullet~\texttt{#1}\quad\textit{#2}~\textit{#3}\par\smallskip}

\begin{document}

\noindent\textbf{Question}
\medskip

% @@BEGIN_BODY
Write your question body here in \LaTeX{}.
% @@END_BODY

\bigskip\hrule\bigskip

\noindent\textbf{Solution}
\medskip

% @@BEGIN_SOLUTION
% Write the solution here in \LaTeX{}. Lines starting with % are ignored.
% @@END_SOLUTION

\bigskip\hrule\bigskip

\noindent\textbf{Grading Criteria}
\medskip

% @@BEGIN_CRITERIA
% Add criteria using \criterion{description}{points}:
% @@END_CRITERIA

\bigskip\hrule\bigskip

\noindent\textbf{Courses}
\medskip

% @@BEGIN_COURSES
% Add courses using \course{course\_code}{difficulty}{topic}:
% Difficulty: easy | medium | hard. Topic is optional (leave \{\} empty).
% @@END_COURSES

\end{document}
";

/// Lines starting with this character are comments outside the body
pub const COMMENT_PREFIX: char = '%';

/// One of the four delimited template regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Body,
    Solution,
    Criteria,
    Courses,
}

impl Region {
    pub const ALL: [Region; 4] = [Self::Body, Self::Solution, Self::Criteria, Self::Courses];

    /// Marker name used in `% @@BEGIN_<NAME>` lines
    pub fn name(&self) -> &'static str {
        match self {
            Self::Body => "BODY",
            Self::Solution => "SOLUTION",
            Self::Criteria => "CRITERIA",
            Self::Courses => "COURSES",
        }
    }

    pub fn begin_marker(&self) -> &'static str {
        match self {
            Self::Body => "% @@BEGIN_BODY",
            Self::Solution => "% @@BEGIN_SOLUTION",
            Self::Criteria => "% @@BEGIN_CRITERIA",
            Self::Courses => "% @@BEGIN_COURSES",
        }
    }

    pub fn end_marker(&self) -> &'static str {
        match self {
            Self::Body => "% @@END_BODY",
            Self::Solution => "% @@END_SOLUTION",
            Self::Criteria => "% @@END_CRITERIA",
            Self::Courses => "% @@END_COURSES",
        }
    }
}

/// A section marker line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Begin(Region),
    End(Region),
}

impl Marker {
    /// Recognize a marker from an already-trimmed line
    pub fn from_trimmed(line: &str) -> Option<Self> {
        Region::ALL.into_iter().find_map(|region| {
            if line == region.begin_marker() {
                Some(Self::Begin(region))
            } else if line == region.end_marker() {
                Some(Self::End(region))
            } else {
                None
            }
        })
    }
}
