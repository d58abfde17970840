/*
 * The $1 Unistroke Recognizer and Protractor (rust version)
 *
 * Original authors:
 *
 *	    Jacob O. Wobbrock, Ph.D.
 * 	    The Information School
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    wobbrock@uw.edu
 *
 *	    Andrew D. Wilson, Ph.D.
 *	    Microsoft Research
 *	    One Microsoft Way
 *	    Redmond, WA 98052
 *	    awilson@microsoft.com
 *
 *	    Yang Li, Ph.D.
 *	    Department of Computer Science and Engineering
 *	    University of Washington
 *	    Seattle, WA 98195-2840
 *	    yangli@cs.washington.edu
 *
 * The academic publications for the $1 recognizer and for Protractor,
 * and what should be used to cite them, are:
 *
 *	Wobbrock, J.O., Wilson, A.D. and Li, Y. (2007). Gestures without
 *	  libraries, toolkits or training: A $1 recognizer for user interface
 *	  prototypes. Proceedings of the ACM Symposium on User Interface
 *	  Software and Technology (UIST '07). Newport, Rhode Island
 *	  (October 7-10, 2007). New York: ACM Press, pp. 159-168.
 *
 *	Li, Y. (2010). Protractor: A fast and accurate gesture recognizer.
 *	  Proceedings of the ACM Conference on Human Factors in Computing
 *	  Systems (CHI '10). Atlanta, Georgia (April 10-15, 2010).
 *	  New York: ACM Press, pp. 2169-2172.
 *
 * This software is distributed under the "New BSD License" agreement:
 *
 * Copyright (c) 2007-2012, Jacob O. Wobbrock, Andrew D. Wilson and Yang Li.
 * All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without
 * modification, are permitted provided that the following conditions are met:
 *    * Redistributions of source code must retain the above copyright
 *      notice, this list of conditions and the following disclaimer.
 *    * Redistributions in binary form must reproduce the above copyright
 *      notice, this list of conditions and the following disclaimer in the
 *      documentation and/or other materials provided with the distribution.
 *    * Neither the names of the University of Washington nor Microsoft,
 *      nor the names of its contributors may be used to endorse or promote
 *      products derived from this software without specific prior written
 *      permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS
 * IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO,
 * THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR
 * PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL Jacob O. Wobbrock OR Andrew D. Wilson
 * OR Yang Li OR Ferran Pujol Camins BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL,
 * EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT
 * OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
 * INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
 * STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY
 * OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF
 * SUCH DAMAGE.
**/

use crate::{
    builtin_templates::BUILTIN_TEMPLATES,
    error::Result,
    gesture::UniStroke,
    parameters::RecognizerParameters,
    point::Point,
};
use log::trace;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// A named raw stroke, as supplied by the application before normalization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TemplateDefinition {
    pub name: String,
    pub points: Vec<Point>,
}

/// Raw strokes of the built-in shapes, in the order they are registered
pub fn builtin_definitions() -> Vec<TemplateDefinition> {
    BUILTIN_TEMPLATES
        .iter()
        .map(|(name, raw)| TemplateDefinition {
            name: name.to_string(),
            points: raw.iter().copied().map(Point::from).collect(),
        })
        .collect()
}

/// Ordered collection of templates, all normalized with the same parameters.
/// Names need not be unique.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    params: RecognizerParameters,
    templates: Vec<UniStroke>,
}

impl Default for TemplateStore {
    /// An empty store with the default parameters
    fn default() -> Self {
        Self {
            params: RecognizerParameters::default(),
            templates: Vec::new(),
        }
    }
}

impl TemplateStore {
    /// Creates an empty store, rejecting parameters the pipeline cannot work with
    pub fn new(params: RecognizerParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            params,
            templates: Vec::new(),
        })
    }

    /// Creates a store holding the sixteen built-in shapes
    pub fn builtin(params: RecognizerParameters) -> Result<Self> {
        Self::from_definitions(params, builtin_definitions())
    }

    /// Creates a store from an ordered list of named raw strokes
    pub fn from_definitions<I>(params: RecognizerParameters, definitions: I) -> Result<Self>
    where
        I: IntoIterator<Item = TemplateDefinition>,
    {
        let mut store = Self::new(params)?;
        for definition in definitions {
            store.register(&definition.name, &definition.points)?;
        }
        Ok(store)
    }

    /// Normalizes the raw points and appends the template at the end of the store
    pub fn register(&mut self, name: &str, raw: &[Point]) -> Result<()> {
        let template = UniStroke::new(name, raw, &self.params)?;
        trace!("registered template {} ({} raw points)", name, raw.len());
        self.templates.push(template);
        Ok(())
    }

    /// All templates, in registration order
    pub fn all(&self) -> &[UniStroke] {
        &self.templates
    }

    /// Iterates over the templates in registration order
    pub fn iter(&self) -> std::slice::Iter<'_, UniStroke> {
        self.templates.iter()
    }

    /// Number of registered templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// True when no template has been registered
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Parameters every template (and every query) is normalized with
    pub fn params(&self) -> &RecognizerParameters {
        &self.params
    }
}

impl<'a> IntoIterator for &'a TemplateStore {
    type Item = &'a UniStroke;
    type IntoIter = std::slice::Iter<'a, UniStroke>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RecognizerError;

    fn points(raw: &[(f32, f32)]) -> Vec<Point> {
        raw.iter().copied().map(Point::from).collect()
    }

    #[test]
    fn test_builtin_store() {
        let store = TemplateStore::builtin(RecognizerParameters::default()).unwrap();
        assert_eq!(store.len(), 16);
        assert_eq!(store.all()[0].name, "triangle");
        assert_eq!(store.all()[15].name, "pigtail");
        for template in &store {
            assert_eq!(template.points.len(), 64);
            let norm: f32 = template.vector.iter().map(|v| v * v).sum::<f32>().sqrt();
            assert!((norm - 1.0).abs() < 1e-4, "{} has norm {}", template.name, norm);
        }
    }

    #[test]
    fn test_register_keeps_order_and_duplicates() {
        let mut store = TemplateStore::default();
        assert!(store.is_empty());
        let v = points(&[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]);
        let caret = points(&[(0.0, 10.0), (5.0, 0.0), (10.0, 10.0)]);
        store.register("v", &v).unwrap();
        store.register("caret", &caret).unwrap();
        store.register("v", &v).unwrap();
        let names: Vec<&str> = store.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["v", "caret", "v"]);
    }

    #[test]
    fn test_register_rejects_invalid_stroke() {
        let mut store = TemplateStore::default();
        let line = points(&[(0.0, 0.0), (100.0, 0.0)]);
        assert!(matches!(
            store.register("line", &line),
            Err(RecognizerError::DegenerateBoundingBox { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_params_apply_to_templates() {
        let params = RecognizerParameters {
            num_points: 16,
            ..Default::default()
        };
        let definitions = vec![TemplateDefinition {
            name: "v".into(),
            points: points(&[(0.0, 0.0), (5.0, 10.0), (10.0, 0.0)]),
        }];
        let store = TemplateStore::from_definitions(params, definitions).unwrap();
        assert_eq!(store.params().num_points, 16);
        assert_eq!(store.all()[0].points.len(), 16);
        assert_eq!(store.all()[0].vector.len(), 32);
    }

    #[test]
    fn test_invalid_params_are_rejected_up_front() {
        let single_point = RecognizerParameters {
            num_points: 1,
            ..Default::default()
        };
        assert!(matches!(
            TemplateStore::new(single_point.clone()),
            Err(RecognizerError::InvalidParameters { .. })
        ));
        assert!(matches!(
            TemplateStore::builtin(single_point),
            Err(RecognizerError::InvalidParameters { .. })
        ));
        let no_precision = RecognizerParameters {
            angle_precision: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            TemplateStore::from_definitions(no_precision, builtin_definitions()),
            Err(RecognizerError::InvalidParameters { .. })
        ));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_definitions_from_ron() {
        let text = r#"[
            (name: "v", points: [(x: 0.0, y: 0.0), (x: 5.0, y: 10.0), (x: 10.0, y: 0.0)]),
            (name: "caret", points: [(x: 0.0, y: 10.0), (x: 5.0, y: 0.0), (x: 10.0, y: 10.0)]),
        ]"#;
        let definitions: Vec<TemplateDefinition> = ron::from_str(text).unwrap();
        let store =
            TemplateStore::from_definitions(RecognizerParameters::default(), definitions).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[1].name, "caret");
    }
}
