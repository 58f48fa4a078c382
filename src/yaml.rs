use std::{fs::File, iter::Peekable};

use libyaml::{Encoding, Event, Parser, ParserIter};

use crate::{
    braille::{self, group_dots},
    test::{ExpectedFailure, Test, TestMode, TestSuite},
};

type YAMLEventError = Option<Result<Event, libyaml::ParserError>>;

#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("Scalar expected, got {0:?}")]
    ScalarExpected(YAMLEventError),
    #[error("YAML parse error")]
    YAMLError(#[from] libyaml::ParserError),
    #[error("Stream start expected")]
    StreamStartExpected,
    #[error("Stream end expected")]
    StreamEndExpected,
    #[error("Document start expected")]
    DocumentStartExpected,
    #[error("Document end expected")]
    DocumentEndExpected,
    #[error("Sequence start expected")]
    SequenceStartExpected,
    #[error("Sequence end expected, got {0:?}")]
    SequenceEndExpected(YAMLEventError),
    #[error("Mapping start expected, got {0:?}")]
    MappingStartExpected(YAMLEventError),
    #[error("Mapping end expected")]
    MappingEndExpected,
    #[error("Invalid test mode {0:?}")]
    InvalidTestMode(String),
    #[error("Encoding {0:?} not supported")]
    InvalidEncoding(Encoding),
    #[error("Invalid expected braille {expected:?}")]
    InvalidExpected {
        expected: String,
        #[source]
        source: braille::ParseError,
    },
    #[error("Invalid token {0:?}")]
    InvalidToken(String),
}

pub struct YAMLParser<'a> {
    events: Peekable<ParserIter<'a>>,
}

impl<'a> YAMLParser<'a> {
    pub fn new(reader: File) -> Result<Self, ParseError> {
        let parser = Parser::new(reader)?;
        Ok(Self {
            events: parser.into_iter().peekable(),
        })
    }

    fn scalar(&mut self) -> Result<String, ParseError> {
        match self.events.next() {
            Some(Ok(Event::Scalar { value, .. })) => Ok(value),
            e => Err(ParseError::ScalarExpected(e)),
        }
    }

    fn mapping_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::MappingStart { .. })) => Ok(()),
            e => Err(ParseError::MappingStartExpected(e)),
        }
    }

    fn mapping_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::MappingEnd)) => Ok(()),
            _ => Err(ParseError::MappingEndExpected),
        }
    }

    fn sequence_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::SequenceStart { .. })) => Ok(()),
            _ => Err(ParseError::SequenceStartExpected),
        }
    }

    fn sequence_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::SequenceEnd)) => Ok(()),
            e => Err(ParseError::SequenceEndExpected(e)),
        }
    }

    fn flags(&mut self) -> Result<TestMode, ParseError> {
        self.mapping_start()?;
        let value = self.scalar()?;
        if value != "testmode" {
            return Err(ParseError::InvalidToken(value));
        }
        let mode = self.scalar()?;
        let mode = match &*mode {
            "dots" => TestMode::Dots,
            "unicode" => TestMode::Unicode,
            _ => {
                return Err(ParseError::InvalidTestMode(mode));
            }
        };
        self.mapping_end()?;
        Ok(mode)
    }

    fn xfail(&mut self) -> Result<ExpectedFailure, ParseError> {
        let value = self.scalar()?;
        let xfail = match &*value {
            "off" | "false" | "no" => ExpectedFailure::Simple(false),
            "on" | "true" | "yes" => ExpectedFailure::Simple(true),
            _ => ExpectedFailure::Reason(value),
        };
        Ok(xfail)
    }

    /// Make sure the expected dot notation can be parsed, so that a typo
    /// in a test file is not reported as a translation failure
    fn check_expected(expected: &str) -> Result<(), ParseError> {
        for group in expected.split_whitespace() {
            group_dots(group).map_err(|source| ParseError::InvalidExpected {
                expected: expected.to_string(),
                source,
            })?;
        }
        Ok(())
    }

    fn test(&mut self, mode: TestMode) -> Result<Test, ParseError> {
        self.sequence_start()?;
        let mut description = None;
        let mut input = self.scalar()?;
        let mut expected = self.scalar()?;
        // two scalars are (input, expected), three scalars are
        // (description, input, expected)
        if let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            description = Some(input);
            input = expected;
            expected = self.scalar()?;
        }
        let mut xfail = ExpectedFailure::default();
        if let Some(Ok(Event::MappingStart { .. })) = self.events.peek() {
            self.mapping_start()?;
            while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
                let value = self.scalar()?;
                match &*value {
                    "xfail" => {
                        xfail = self.xfail()?;
                    }
                    _ => {
                        return Err(ParseError::InvalidToken(value));
                    }
                }
            }
            self.mapping_end()?;
        };
        self.sequence_end()?;
        if mode == TestMode::Dots {
            Self::check_expected(&expected)?;
        }
        Ok(Test::new(description, input, expected, xfail))
    }

    fn tests(&mut self, mode: TestMode) -> Result<Vec<Test>, ParseError> {
        let mut tests: Vec<Test> = Vec::new();
        self.sequence_start()?;
        while let Some(Ok(Event::SequenceStart { .. })) = self.events.peek() {
            tests.push(self.test(mode)?);
        }
        self.sequence_end()?;
        Ok(tests)
    }

    fn stream_start(&mut self) -> Result<(), ParseError> {
        if let Some(Ok(Event::StreamStart {
            encoding: Some(encoding),
        })) = self.events.next()
        {
            if encoding == Encoding::Utf8 {
                Ok(())
            } else {
                Err(ParseError::InvalidEncoding(encoding))
            }
        } else {
            Err(ParseError::StreamStartExpected)
        }
    }

    fn stream_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::StreamEnd)) => Ok(()),
            _ => Err(ParseError::StreamEndExpected),
        }
    }

    fn document_start(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::DocumentStart { .. })) => Ok(()),
            _ => Err(ParseError::DocumentStartExpected),
        }
    }

    fn document_end(&mut self) -> Result<(), ParseError> {
        match self.events.next() {
            Some(Ok(Event::DocumentEnd { .. })) => Ok(()),
            _ => Err(ParseError::DocumentEndExpected),
        }
    }

    /// Parse the whole file. Every `tests` list becomes a [`TestSuite`]
    /// using the most recent `flags`.
    pub fn yaml(&mut self) -> Result<Vec<TestSuite>, ParseError> {
        let mut test_suites: Vec<TestSuite> = Vec::new();
        let mut test_mode = TestMode::default();

        self.stream_start()?;
        self.document_start()?;
        self.mapping_start()?;
        while let Some(Ok(Event::Scalar { .. })) = self.events.peek() {
            let value = self.scalar()?;
            match &*value {
                "flags" => {
                    test_mode = self.flags()?;
                }
                "tests" => {
                    let tests = self.tests(test_mode)?;
                    test_suites.push(TestSuite::new(test_mode, tests));
                }
                _ => {
                    return Err(ParseError::InvalidToken(value));
                }
            }
        }
        self.mapping_end()?;
        self.document_end()?;
        self.stream_end()?;
        Ok(test_suites)
    }
}
